multiversx_sc::imports!();

use common_structs::{IsolationModeState, ReserveConfiguration, UserConfiguration};

use crate::storage;

/// The UserConfigModule loads and stores the per user collateral / borrowing bitmap and derives
/// the isolation mode from it.
#[multiversx_sc::module]
pub trait UserConfigModule: storage::Storage + common_events::EventsModule {
    fn get_user_configuration(&self, user: &ManagedAddress) -> UserConfiguration<Self::Api> {
        UserConfiguration::new(self.user_configuration(user).get())
    }

    fn store_user_configuration(
        &self,
        user: &ManagedAddress,
        configuration: UserConfiguration<Self::Api>,
    ) {
        let mapper = self.user_configuration(user);
        if configuration.is_empty() {
            mapper.clear();
        } else {
            mapper.set(configuration.into_data());
        }
    }

    /// Flags `asset` as collateral of `user` and emits the matching event.
    fn enable_collateral(
        &self,
        configuration: &mut UserConfiguration<Self::Api>,
        reserve_id: u32,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
    ) {
        configuration.set_using_as_collateral(reserve_id, true);
        self.reserve_used_as_collateral_enabled_event(asset, user);
    }

    fn disable_collateral(
        &self,
        configuration: &mut UserConfiguration<Self::Api>,
        reserve_id: u32,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
    ) {
        configuration.set_using_as_collateral(reserve_id, false);
        self.reserve_used_as_collateral_disabled_event(asset, user);
    }

    /// Resolves the isolation mode of a bitmap.
    ///
    /// Active only when exactly one reserve is flagged as collateral and that reserve has a non
    /// zero debt ceiling.
    ///
    /// # Arguments
    /// - `configuration`: The user's bitmap.
    ///
    /// # Returns
    /// - `IsolationModeState`: The isolated collateral asset and its debt ceiling, or inactive.
    fn get_isolation_mode_state(
        &self,
        configuration: &UserConfiguration<Self::Api>,
    ) -> IsolationModeState<Self::Api> {
        let isolated = configuration.get_isolation_mode_state(|reserve_id| {
            let asset_mapper = self.reserves_list(reserve_id);
            if asset_mapper.is_empty() {
                return 0;
            }
            self.reserve_configuration(&asset_mapper.get()).get().debt_ceiling
        });

        match isolated {
            Some((reserve_id, debt_ceiling)) => IsolationModeState {
                is_active: true,
                collateral_asset: Some(self.reserves_list(reserve_id).get()),
                debt_ceiling,
            },
            None => IsolationModeState::inactive(),
        }
    }

    /// Whether a reserve may become collateral of a user.
    ///
    /// Zero LTV assets never do. A user without collateral may pick anything; otherwise neither the
    /// user may be isolated nor the new asset be an isolated one.
    fn validate_use_as_collateral(
        &self,
        configuration: &UserConfiguration<Self::Api>,
        reserve_configuration: &ReserveConfiguration,
    ) -> bool {
        if reserve_configuration.ltv == 0 {
            return false;
        }
        if !configuration.is_using_as_collateral_any() {
            return true;
        }

        let isolation = self.get_isolation_mode_state(configuration);
        !isolation.is_active && !reserve_configuration.is_isolated()
    }
}
