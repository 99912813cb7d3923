use multiversx_sc::proxy_imports::*;

use crate::types::ContributionAuthorization;

pub struct AllocationMechanismProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for AllocationMechanismProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = AllocationMechanismProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        AllocationMechanismProxyMethods { wrapped_tx: tx }
    }
}

pub struct AllocationMechanismProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> AllocationMechanismProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    /// Payable: the contributed tokens travel with the call.
    pub fn sign_up<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ContributionAuthorization<Env::Api>>,
    >(
        self,
        delegate: Arg0,
        authorization: Arg1,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("signUp")
            .argument(&delegate)
            .argument(&authorization)
            .original_result()
    }
}
