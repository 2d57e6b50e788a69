multiversx_sc::imports!();

use common_errors::{ERROR_INVALID_PRICE, ERROR_PRICE_ORACLE_NOT_SET};
use common_proxies::price_oracle_proxy::PriceOracleProxy;

use crate::storage;

/// The OracleModule reads asset prices from the configured price oracle.
///
/// Prices are wads in the oracle's base currency, per whole token of the asset.
#[multiversx_sc::module]
pub trait OracleModule: storage::Storage {
    /// Fetches the price of `asset` with a read-only synchronous call.
    ///
    /// A zero price is rejected with `ERROR_INVALID_PRICE`: every valuation built on it would be
    /// meaningless.
    ///
    /// # Arguments
    /// - `asset`: The asset to price.
    ///
    /// # Returns
    /// - `BigUint`: The asset price in base currency, wad.
    fn get_asset_price(&self, asset: &EgldOrEsdtTokenIdentifier) -> BigUint {
        let oracle_mapper = self.price_oracle();
        require!(!oracle_mapper.is_empty(), ERROR_PRICE_ORACLE_NOT_SET);

        let price = self
            .tx()
            .to(&oracle_mapper.get())
            .typed(PriceOracleProxy)
            .get_asset_price(asset)
            .returns(ReturnsResult)
            .sync_call_readonly();

        require!(price > BigUint::zero(), ERROR_INVALID_PRICE);

        price
    }
}
