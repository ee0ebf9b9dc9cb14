//! Solidity bindings for the Illuminate contracts.
//!
//! Uses alloy's `sol!` macro to generate type-safe ABI encoders/decoders.
//! `lend` and `redeem` are overloaded on-chain; alloy suffixes overloads
//! with their declaration index (`lend_0Call`, `lend_1Call`, ...), so the
//! aliases at the bottom of this file give each overload a name by shape.
//! Reordering the overloads below changes which alias points where.

use alloy::sol;

sol! {
    #![sol(all_derives)]

    /// Custom error raised by every Illuminate contract.
    error Exception(uint8 code, uint256 amount, uint256 amountExpected, address addr, address addrExpected);

    /// Swivel order, signed off-chain by the maker.
    struct Order {
        bytes32 key;
        uint8 protocol;
        address maker;
        address underlying;
        bool vault;
        bool exit;
        uint256 principal;
        uint256 premium;
        uint256 maturity;
        uint256 expiry;
    }

    /// ECDSA signature split for on-chain verification.
    struct Components {
        uint8 v;
        bytes32 r;
        bytes32 s;
    }

    interface IERC20 {
        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
        function transfer(address to, uint256 amount) external returns (bool);
        function transferFrom(address from, address to, uint256 amount) external returns (bool);
    }

    interface IMarketPlace {
        function admin() external view returns (address);
        function lender() external view returns (address);
        function redeemer() external view returns (address);
        function token(address underlying, uint256 maturity, uint256 p) external view returns (address);
        function pools(address underlying, uint256 maturity) external view returns (address);

        function createMarket(address underlying, uint256 maturity, address[] calldata tokens, string calldata name, string calldata symbol) external returns (bool);
        function setPrincipal(uint8 p, address underlying, uint256 maturity, address principalToken) external returns (bool);
        function setPool(address underlying, uint256 maturity, address pool) external returns (bool);

        function sellPrincipalToken(address underlying, uint256 maturity, uint128 amount, uint128 minimum) external returns (uint128);
        function buyPrincipalToken(address underlying, uint256 maturity, uint128 amount, uint128 maximum) external returns (uint128);
        function sellUnderlying(address underlying, uint256 maturity, uint128 amount, uint128 minimum) external returns (uint128);
        function buyUnderlying(address underlying, uint256 maturity, uint128 amount, uint128 maximum) external returns (uint128);

        function mint(address underlying, uint256 maturity, uint256 baseAmount, uint256 principalAmount, uint256 minRatio, uint256 maxRatio) external returns (uint256, uint256, uint256);
        function mintWithUnderlying(address underlying, uint256 maturity, uint256 amount, uint256 principalAmount, uint256 minRatio, uint256 maxRatio) external returns (uint256, uint256, uint256);
        function burn(address underlying, uint256 maturity, uint256 amount, uint256 minRatio, uint256 maxRatio) external returns (uint256, uint256, uint256);
        function burnForUnderlying(address underlying, uint256 maturity, uint256 amount, uint256 minRatio, uint256 maxRatio) external returns (uint256, uint256);
    }

    interface ILender {
        function admin() external view returns (address);
        function marketPlace() external view returns (address);
        function paused(uint8 p) external view returns (bool);
        function feenominator() external view returns (uint256);
        function fees(address underlying) external view returns (uint256);

        function mint(uint8 p, address underlying, uint256 maturity, uint256 amount) external returns (bool);

        function lend(uint8 p, address underlying, uint256 maturity, uint256 amount, address pool) external returns (uint256);
        function lend(uint8 p, address underlying, uint256 maturity, uint256[] calldata amounts, address pool, Order[] calldata orders, Components[] calldata signatures) external returns (uint256);
        function lend(uint8 p, address underlying, uint256 maturity, uint256 amount, uint256 minReturn, uint256 deadline, address pool, bytes32 poolId) external returns (uint256);
        function lend(uint8 p, address underlying, uint256 maturity, uint256 amount, uint256 minReturn, uint256 deadline) external returns (uint256);
        function lend(uint8 p, address underlying, uint256 maturity, uint256 amount, uint256 minReturn, uint256 deadline, address pool) external returns (uint256);
        function lend(uint8 p, address underlying, uint256 maturity, uint128 amount, uint256 minReturn, address periphery, address adapter) external returns (uint256);
        function lend(uint8 p, address underlying, uint256 maturity, uint256 amount) external returns (uint256);
        function lend(uint8 p, address underlying, uint256 maturity, uint256[] calldata amounts, bytes calldata payload) external returns (uint256);
    }

    interface IRedeemer {
        function admin() external view returns (address);
        function lender() external view returns (address);
        function marketPlace() external view returns (address);
        function holdings(address underlying, uint256 maturity) external view returns (uint256);
        function paused(address underlying, uint256 maturity) external view returns (bool);

        function redeem(address underlying, uint256 maturity) external returns (bool);
        function redeem(uint8 p, address underlying, uint256 maturity) external returns (bool);
        function redeem(uint8 p, address underlying, uint256 maturity, uint256 seriesMaturity, uint256 amount, address periphery) external returns (bool);
        function redeem(uint8 p, address underlying, uint256 maturity, bytes calldata payload) external returns (bool);

        function autoRedeem(address underlying, uint256 maturity, address[] calldata owners) external returns (uint256);
    }

    interface IStrategy {
        function underlying() external view returns (address);
        function maturity() external view returns (uint256);
        function pool() external view returns (address);
        function totalAssets() external view returns (uint256);
        function previewDeposit(uint256 assets) external view returns (uint256);
        function previewWithdraw(uint256 shares) external view returns (uint256);

        function deposit(uint256 assets, uint256 minRatio, uint256 maxRatio) external returns (uint256 shares);
        function withdraw(uint256 shares, uint256 minRatio, uint256 maxRatio) external returns (uint256 assets);
        function rollover(uint256 nextMaturity, uint256 minRatio, uint256 maxRatio) external returns (uint256);
    }

    interface IStrategyRouter {
        function deposit(address strategy, uint256 assets, uint256 minRatio, uint256 maxRatio) external returns (uint256 shares);
        function withdraw(address strategy, uint256 shares, uint256 minimumOut) external returns (uint256 assets);
    }

    interface IETHStrategyRouter {
        function weth() external view returns (address);
        function deposit(address strategy, uint256 minRatio, uint256 maxRatio) external payable returns (uint256 shares);
        function withdraw(address strategy, uint256 shares, uint256 minimumOut) external returns (uint256 assets);
    }
}

/// `lend(uint8,address,uint256,uint256,address)`: Illuminate and Yield.
pub type LendPoolCall = ILender::lend_0Call;
/// Swivel order-book lend.
pub type LendSwivelCall = ILender::lend_1Call;
/// `lend(uint8,address,uint256,uint256,uint256,uint256,address,bytes32)`: Element.
pub type LendElementCall = ILender::lend_2Call;
/// `lend(uint8,address,uint256,uint256,uint256,uint256)`: Pendle.
pub type LendPendleCall = ILender::lend_3Call;
/// `lend(uint8,address,uint256,uint256,uint256,uint256,address)`: Tempus and APWine.
pub type LendSwapCall = ILender::lend_4Call;
/// `lend(uint8,address,uint256,uint128,uint256,address,address)`: Sense.
pub type LendSenseCall = ILender::lend_5Call;
/// `lend(uint8,address,uint256,uint256)`: Notional and Exactly.
pub type LendDirectCall = ILender::lend_6Call;
/// `lend(uint8,address,uint256,uint256[],bytes)`: adapter payload entry point.
pub type LendPayloadCall = ILender::lend_7Call;

/// `redeem(address,uint256)`: Illuminate principal tokens.
pub type RedeemIlluminateCall = IRedeemer::redeem_0Call;
/// `redeem(uint8,address,uint256)`: every external principal except Sense.
pub type RedeemPrincipalCall = IRedeemer::redeem_1Call;
/// `redeem(uint8,address,uint256,uint256,uint256,address)`: Sense.
pub type RedeemSenseCall = IRedeemer::redeem_2Call;
/// `redeem(uint8,address,uint256,bytes)`: adapter payload entry point.
pub type RedeemPayloadCall = IRedeemer::redeem_3Call;
