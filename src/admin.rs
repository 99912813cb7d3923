multiversx_sc::imports!();

use crate::errors::{ERR_NOT_ADMIN, ERR_PAUSED, ERR_ZERO_ADDRESS};
use crate::types::PausePolicy;

#[multiversx_sc::module]
pub trait AdminModule: crate::events::EventsModule + crate::guard::GuardModule {
    #[endpoint(setAdmin)]
    fn set_admin(&self, new_admin: ManagedAddress) {
        self.acquire_lock();
        self.require_admin();
        require!(!new_admin.is_zero(), ERR_ZERO_ADDRESS);

        let old_admin = self.admin().get();
        self.admin().set(&new_admin);
        self.admin_set_event(&old_admin, &new_admin);

        self.release_lock();
    }

    // ========================================================
    // Emergency pause
    // ========================================================

    #[endpoint(pause)]
    fn pause(&self) {
        self.acquire_lock();
        self.require_admin();
        self.paused().set(true);
        self.pause_state_changed_event(true);

        self.release_lock();
    }

    #[endpoint(unpause)]
    fn unpause(&self) {
        self.acquire_lock();
        self.require_admin();
        self.paused().set(false);
        self.pause_state_changed_event(false);

        self.release_lock();
    }

    fn require_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.admin().get(), ERR_NOT_ADMIN);
    }

    /// Entry check for endpoints that open or grow exposure.
    fn require_not_paused(&self) {
        require!(!self.paused().get(), ERR_PAUSED);
    }

    /// Entry check for withdraw and claim; the deployment's pause policy
    /// decides whether exits survive a pause.
    fn require_exit_allowed(&self) {
        if !self.paused().get() {
            return;
        }
        require!(
            self.pause_policy().get() == PausePolicy::AllowExits,
            ERR_PAUSED
        );
    }

    #[view(getAdmin)]
    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(isPaused)]
    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;

    #[view(getPausePolicy)]
    #[storage_mapper("pausePolicy")]
    fn pause_policy(&self) -> SingleValueMapper<PausePolicy>;
}
