multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::{
    InterestRateStrategy, ReserveConfiguration, ReserveData, ScaledBalance, ScaledTokenKind,
    StableDebtPosition, StableDebtTotals,
};

/// The Storage trait provides the on-chain storage mappers of the pool: the reserve registry, the
/// per reserve records, the three token ledgers and the user bitmaps.
#[multiversx_sc::module]
pub trait Storage {
    /// Accounting record of a listed reserve. Empty for unlisted assets.
    #[storage_mapper("reserve_data")]
    fn reserve_data(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<ReserveData<Self::Api>>;

    /// Returns the risk and lifecycle parameters of a reserve.
    ///
    /// # Arguments
    /// - `asset`: The underlying asset of the reserve.
    ///
    /// # Returns
    /// - `ReserveConfiguration`: LTV, thresholds, flags, caps and factors.
    #[view(getConfiguration)]
    #[storage_mapper("reserve_configuration")]
    fn reserve_configuration(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<ReserveConfiguration>;

    /// Returns the interest rate curve of a reserve.
    #[view(getInterestRateStrategy)]
    #[storage_mapper("interest_rate_strategy")]
    fn interest_rate_strategy(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<InterestRateStrategy<Self::Api>>;

    /// Asset listed under a reserve id. Empty once the reserve was dropped.
    #[storage_mapper("reserves_list")]
    fn reserves_list(&self, reserve_id: u32) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    /// Number of id slots handed out so far, dropped ones included.
    #[view(getReservesCount)]
    #[storage_mapper("reserves_count")]
    fn reserves_count(&self) -> SingleValueMapper<u32>;

    /// Raw collateral / borrowing bitmap of a user.
    #[storage_mapper("user_configuration")]
    fn user_configuration(&self, user: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("scaled_balance")]
    fn scaled_balance(
        &self,
        kind: ScaledTokenKind,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
    ) -> SingleValueMapper<ScaledBalance<Self::Api>>;

    #[storage_mapper("scaled_total_supply")]
    fn scaled_total_supply(
        &self,
        kind: ScaledTokenKind,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("stable_debt_position")]
    fn stable_debt_position(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
    ) -> SingleValueMapper<StableDebtPosition<Self::Api>>;

    #[storage_mapper("stable_debt_totals")]
    fn stable_debt_totals(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<StableDebtTotals<Self::Api>>;

    /// Returns the price oracle queried for every collateral and debt valuation.
    ///
    /// # Returns
    /// - `ManagedAddress`: The oracle contract address.
    #[view(getPriceOracle)]
    #[storage_mapper("price_oracle")]
    fn price_oracle(&self) -> SingleValueMapper<ManagedAddress>;

    /// Returns the address credited by `mintToTreasury`.
    #[view(getTreasury)]
    #[storage_mapper("treasury")]
    fn treasury(&self) -> SingleValueMapper<ManagedAddress>;

    /// Share of the unbacked backing fee kept by the protocol, in basis points.
    #[view(getBridgeProtocolFee)]
    #[storage_mapper("bridge_protocol_fee")]
    fn bridge_protocol_fee(&self) -> SingleValueMapper<u64>;

    /// Addresses allowed to mint and back unbacked supply.
    #[view(getBridges)]
    #[storage_mapper("bridges")]
    fn bridges(&self) -> UnorderedSetMapper<ManagedAddress>;
}
