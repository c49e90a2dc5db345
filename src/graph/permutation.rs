use anyhow::{bail, Result};

use super::models::NodeId;

/// Inverse of `order`, so that `inv[order[i]] == i`.
///
/// `order` must be a permutation of `0..order.len()`. This is only checked in
/// debug builds; use [`checked_inverse`] for untrusted input.
pub fn inverse(order: &[NodeId]) -> Vec<NodeId> {
    debug_assert!(is_permutation(order), "inverse: input is not a permutation");
    let mut inv = vec![NodeId(0); order.len()];
    for (i, &n) in order.iter().enumerate() {
        inv[n.index()] = NodeId(i as u32);
    }
    inv
}

pub fn is_permutation(order: &[NodeId]) -> bool {
    checked_inverse(order).is_ok()
}

/// Validates and inverts in one pass; a slot that is no longer `UNSET` marks a duplicate.
pub fn checked_inverse(order: &[NodeId]) -> Result<Vec<NodeId>> {
    const UNSET: NodeId = NodeId(u32::MAX);
    let mut inv = vec![UNSET; order.len()];
    for (i, &n) in order.iter().enumerate() {
        match inv.get_mut(n.index()) {
            None => bail!(
                "permutation entry {} at position {} is out of range (len {})",
                n.0,
                i,
                order.len()
            ),
            Some(slot) if *slot != UNSET => {
                bail!("permutation entry {} at position {} is a duplicate", n.0, i)
            }
            Some(slot) => *slot = NodeId(i as u32),
        }
    }
    Ok(inv)
}

pub fn identity(n: usize) -> Vec<NodeId> {
    (0..n as u32).map(NodeId).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(v: &[u32]) -> Vec<NodeId> {
        v.iter().copied().map(NodeId).collect()
    }

    #[test]
    fn inverse_of_rotation() {
        let p = ids(&[2, 0, 1, 3]);
        let inv = inverse(&p);
        assert_eq!(inv, ids(&[1, 2, 0, 3]));
        for (i, n) in p.iter().enumerate() {
            assert_eq!(inv[n.index()], NodeId(i as u32));
        }
    }

    #[test]
    fn inverse_twice_is_original() {
        let p = ids(&[4, 2, 0, 1, 3]);
        assert_eq!(inverse(&inverse(&p)), p);
        assert_eq!(inverse(&identity(6)), identity(6));
        assert!(inverse(&[]).is_empty());
    }

    #[test]
    fn detects_invalid_permutations() {
        assert!(is_permutation(&ids(&[1, 0, 2])));
        assert!(!is_permutation(&ids(&[0, 0, 2])));
        assert!(!is_permutation(&ids(&[0, 1, 3])));
    }

    #[test]
    fn checked_inverse_reports_bad_entries() {
        let dup = checked_inverse(&ids(&[1, 1])).unwrap_err();
        assert!(dup.to_string().contains("duplicate"));
        let oor = checked_inverse(&ids(&[0, 5])).unwrap_err();
        assert!(oor.to_string().contains("out of range"));
        assert_eq!(checked_inverse(&ids(&[1, 0])).unwrap(), ids(&[1, 0]));
    }

    #[test]
    fn checked_inverse_agrees_with_inverse() {
        let p = ids(&[3, 0, 4, 1, 2]);
        assert_eq!(checked_inverse(&p).unwrap(), inverse(&p));
        // first entry maps to position 0, so a zero-valued slot must still count as filled
        assert!(checked_inverse(&ids(&[0, 0])).is_err());
        assert!(!is_permutation(&ids(&[0, 0])));
        assert!(checked_inverse(&[]).unwrap().is_empty());
    }
}
