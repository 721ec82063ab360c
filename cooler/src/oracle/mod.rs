use common_proxies::proxy_ltv_oracle;

use crate::storage;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait OracleModule: storage::Storage {
    /// Reads `(origination_ltv, liquidation_ltv)` from the configured oracle.
    fn current_ltvs(
        &self,
    ) -> (
        ManagedDecimal<Self::Api, NumDecimals>,
        ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        self.ltvs_from(&self.ltv_oracle().get())
    }

    fn ltvs_from(
        &self,
        oracle: &ManagedAddress,
    ) -> (
        ManagedDecimal<Self::Api, NumDecimals>,
        ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        let ltvs = self
            .tx()
            .to(oracle)
            .typed(proxy_ltv_oracle::LtvOracleProxy)
            .current_ltvs()
            .returns(ReturnsResult)
            .sync_call_readonly();

        ltvs.into_tuple()
    }
}
