#![no_std]

use common_errors::ERROR_INVALID_PRICE;

multiversx_sc::imports!();

/// Settable price feed implementing the oracle interface the pool consumes.
/// Prices are wads of the base currency per whole token.
#[multiversx_sc::contract]
pub trait PriceOracleMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setAssetPrice)]
    fn set_asset_price(&self, asset: EgldOrEsdtTokenIdentifier, price: BigUint) {
        self.prices(&asset).set(price);
    }

    #[view(getAssetPrice)]
    fn get_asset_price(&self, asset: EgldOrEsdtTokenIdentifier) -> BigUint {
        let price = self.prices(&asset).get();
        require!(price > BigUint::zero(), ERROR_INVALID_PRICE);

        price
    }

    #[view(getAssetsPrices)]
    fn get_assets_prices(
        &self,
        assets: MultiValueEncoded<EgldOrEsdtTokenIdentifier>,
    ) -> MultiValueEncoded<BigUint> {
        let mut prices = MultiValueEncoded::new();
        for asset in assets {
            prices.push(self.get_asset_price(asset));
        }

        prices
    }

    #[storage_mapper("prices")]
    fn prices(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<BigUint>;
}
