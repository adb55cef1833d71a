//! User key generation: each member of a ring holds a signing key `sk`, a verification
//! key `pk = sk*g2`, and a pseudonymous identity `pid = sk*g1` that only the tracers can
//! open.

use crate::params::PublicParams;
use curve::{Affine, PowerTable, RandomField, ScalarField};
use rand::Rng;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A user's keypair. `sk` is zeroized on drop; `pk` and `pid` are public.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct UserIdentity {
    pub sk: ScalarField,
    #[zeroize(skip)]
    pub pk: Affine,
    #[zeroize(skip)]
    pub pid: Affine,
    /// Fixed-base table for `pid`, so this user can serve as a fast ring member in
    /// repeated signing without retabling every time.
    #[zeroize(skip)]
    pub pid_table: PowerTable,
}

/// `UserKeyGen(PP)` (§4, data model): sample `sk`, derive `pk = sk*g2`, `pid = sk*g1`.
pub fn user_keygen<R: Rng + ?Sized>(pp: &PublicParams, rng: &mut R) -> UserIdentity {
    let sk = ScalarField::random(rng);
    let pk = pp.g2_table.multiply(&sk);
    let pid = pp.g1_table.multiply(&sk);
    let pid_table = PowerTable::build_default(pid);
    UserIdentity { sk, pk, pid, pid_table }
}
