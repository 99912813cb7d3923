multiversx_sc::imports!();

use crate::errors::ERR_REENTRANT_CALL;

/// Lock held for the whole body of every mutating endpoint.
/// A failed transaction rolls the flag back together with everything else,
/// so only the normal return path has to release it.
#[multiversx_sc::module]
pub trait GuardModule {
    fn acquire_lock(&self) {
        require!(!self.entered().get(), ERR_REENTRANT_CALL);
        self.entered().set(true);
    }

    fn release_lock(&self) {
        self.entered().set(false);
    }

    #[storage_mapper("entered")]
    fn entered(&self) -> SingleValueMapper<bool>;
}
