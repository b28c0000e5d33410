//! Path segment generation

use rand::Rng;

/// Symbols a path segment is drawn from: lowercase, uppercase, digits.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Separator prefixed to every segment.
pub const SEPARATOR: char = '/';

/// Generate a random segment (without separator).
///
/// The length is `max_len` when `exact` is set, otherwise uniform in
/// `[1, max_len]`. `max_len` must be at least 1.
pub fn random_name<R: Rng + ?Sized>(rng: &mut R, max_len: usize, exact: bool) -> String {
    let len = if exact {
        max_len
    } else {
        rng.random_range(1..=max_len)
    };
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Generate a random separator-prefixed segment, as stored in a child map.
pub fn random_segment<R: Rng + ?Sized>(rng: &mut R, max_len: usize, exact: bool) -> String {
    let name = random_name(rng, max_len, exact);
    let mut segment = String::with_capacity(name.len() + 1);
    segment.push(SEPARATOR);
    segment.push_str(&name);
    segment
}

/// Number of distinct names of length `1..=max_len` over `alphabet_size`
/// symbols, i.e. `sum(alphabet_size^i)`. Saturates at `u64::MAX`.
pub fn name_space(alphabet_size: u64, max_len: usize) -> u64 {
    geometric_sum(alphabet_size, max_len)
}

/// `sum(base^i for i in 1..=terms)`, saturating at `u64::MAX`.
pub(crate) fn geometric_sum(base: u64, terms: usize) -> u64 {
    match base {
        0 => return 0,
        1 => return u64::try_from(terms).unwrap_or(u64::MAX),
        _ => {}
    }
    // base >= 2 saturates within 64 terms
    let mut total: u64 = 0;
    let mut power: u64 = 1;
    for _ in 0..terms {
        power = power.saturating_mul(base);
        total = total.saturating_add(power);
        if total == u64::MAX {
            break;
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_alphabet_has_62_symbols() {
        assert_eq!(ALPHABET.len(), 62);
        assert!(ALPHABET.iter().all(|b| b.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_random_name_length_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let name = random_name(&mut rng, 6, false);
            assert!((1..=6).contains(&name.len()));
            assert!(name.bytes().all(|b| ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_random_name_exact_length() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            assert_eq!(random_name(&mut rng, 9, true).len(), 9);
        }
    }

    #[test]
    fn test_random_segment_has_separator() {
        let mut rng = StdRng::seed_from_u64(3);
        let segment = random_segment(&mut rng, 1, true);
        assert_eq!(segment.len(), 2);
        assert!(segment.starts_with('/'));
    }

    #[test]
    fn test_name_space() {
        assert_eq!(name_space(62, 1), 62);
        assert_eq!(name_space(62, 2), 62 + 62 * 62);
        assert_eq!(name_space(2, 3), 2 + 4 + 8);
        assert_eq!(name_space(62, 255), u64::MAX);
    }

    #[test]
    fn test_geometric_sum_base_one() {
        assert_eq!(geometric_sum(1, 255), 255);
        assert_eq!(geometric_sum(1, usize::MAX), usize::MAX as u64);
    }

    #[test]
    fn test_geometric_sum_huge_terms() {
        assert_eq!(geometric_sum(0, usize::MAX), 0);
        assert_eq!(geometric_sum(2, usize::MAX), u64::MAX);
        assert_eq!(name_space(62, usize::MAX), u64::MAX);
    }
}
