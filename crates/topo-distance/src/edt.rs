//! The generalized (spacing-aware) squared Euclidean distance transform.
//!
//! Implements the Felzenszwalt-Huttenlocher lower-envelope algorithm: a
//! 1D pass runs in O(n) by maintaining the lower envelope of parabolas
//! rooted at each sample, then separable 3D distance follows from three
//! 1D passes (x, then y, then z), each feeding the next.

/// Transform one row of squared distances in place along an axis with
/// physical sample spacing `step`.
///
/// `f[i]` on entry is the squared distance of sample `i` to the nearest
/// seed *within this row alone* (typically `0.0` at seeds and `f64::INFINITY`
/// elsewhere on the first pass, or the previous axis's output on later
/// passes). Returns the updated squared distances.
pub fn dt_1d(f: &[f64], step: f64) -> Vec<f64> {
    let n = f.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![f[0]];
    }

    let step2 = step * step;
    let mut v = vec![0usize; n];
    let mut z = vec![0.0f64; n + 1];
    z[0] = f64::NEG_INFINITY;
    z[1] = f64::INFINITY;
    let mut k = 0usize;

    for q in 1..n {
        loop {
            let vk = v[k];
            let s = intersection(f, step2, q, vk);
            if k > 0 && s <= z[k] {
                k -= 1;
            } else {
                k += 1;
                v[k] = q;
                z[k] = s;
                z[k + 1] = f64::INFINITY;
                break;
            }
        }
    }

    let mut out = vec![0.0f64; n];
    let mut k = 0usize;
    for (q, out_q) in out.iter_mut().enumerate() {
        while z[k + 1] < q as f64 {
            k += 1;
        }
        let vk = v[k];
        let diff = step * (q as f64 - vk as f64);
        *out_q = diff * diff + f[vk];
    }
    out
}

/// The x-coordinate (in sample-index units) at which the parabolas rooted
/// at `q` and `vk` intersect, accounting for `step2 = step * step`.
fn intersection(f: &[f64], step2: f64, q: usize, vk: usize) -> f64 {
    let fq = f[q] + step2 * (q * q) as f64;
    let fvk = f[vk] + step2 * (vk * vk) as f64;
    (fq - fvk) / (2.0 * step2 * (q as f64 - vk as f64))
}
