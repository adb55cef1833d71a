//! Shamir secret sharing over the master secret (component D). A `(t, m)` sharing of
//! `s`: sample a degree-`(t-1)` polynomial with constant term `s`, evaluate at
//! `x = 1..=m` for `m` tracers.

use crate::params::{MasterSecret, PublicParams};
use curve::{Affine, RandomField, ScalarField};
use rand::Rng;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// One tracer's share: a scalar `d_i` kept secret by the tracer, and its public
/// commitment `D_i = d_i * g1`, published so `BatchVerify` can check partial
/// decryptions without learning `d_i`.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct TracerShare {
    #[zeroize(skip)]
    pub index: u64,
    pub d_i: ScalarField,
    #[zeroize(skip)]
    pub d_point: Affine,
}

/// `IssueShares(s, t, m)` (§4.D): sample `a_1..a_{t-1}` at random, set `a_0 = s`, and
/// evaluate `f(x) = sum a_j x^j` at `x = 1..=m`.
pub fn issue_shares<R: Rng + ?Sized>(
    pp: &PublicParams,
    master: &MasterSecret,
    rng: &mut R,
) -> Vec<TracerShare> {
    let t = pp.threshold as usize;
    let m = pp.num_tracers as usize;

    let mut coeffs = Vec::with_capacity(t);
    coeffs.push(master.value());
    for _ in 1..t {
        coeffs.push(ScalarField::random(rng));
    }

    (1..=m as u64)
        .map(|i| {
            let x = ScalarField::from_canonical_u64(i);
            let mut acc = ScalarField::ZERO;
            let mut x_pow = ScalarField::ONE;
            for c in &coeffs {
                acc += *c * x_pow;
                x_pow *= x;
            }
            let d_point = pp.g1_table.multiply(&acc);
            TracerShare {
                index: i,
                d_i: acc,
                d_point,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::setup;
    use curve::CurveParams;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn shares_land_on_polynomial_through_the_secret() {
        let mut rng = StdRng::seed_from_u64(7);
        let (pp, master) = setup(CurveParams::toy(), 3, 5, &mut rng).expect("setup");
        let shares = issue_shares(&pp, &master, &mut rng);

        assert_eq!(shares.len(), 5);
        for share in &shares {
            assert_eq!(share.d_point, pp.g1.scalar_mul(&share.d_i));
        }

        // Reconstruct via Lagrange interpolation at 0 using the first t shares and
        // confirm it recovers the master secret's public image Q = s*g1.
        let used = &shares[0..3];
        let xs: Vec<ScalarField> = used.iter().map(|s| ScalarField::from_canonical_u64(s.index)).collect();
        let mut recovered = ScalarField::ZERO;
        for i in 0..used.len() {
            let mut num = ScalarField::ONE;
            let mut den = ScalarField::ONE;
            for j in 0..used.len() {
                if i == j {
                    continue;
                }
                num *= -xs[j];
                den *= xs[i] - xs[j];
            }
            recovered += used[i].d_i * (num / den);
        }
        assert_eq!(pp.g1.scalar_mul(&recovered), pp.q_point);
    }
}
