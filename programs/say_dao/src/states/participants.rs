use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::*;

/// One 128-identifier page of a participant bitmap
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct Cluster {
    /// Cluster index, identifier / CLUSTER_WIDTH
    pub index: u16,                 // 2 bytes

    /// Bit n set => identifier index * CLUSTER_WIDTH + n is in the set
    pub bits: u128,                 // 16 bytes
}

/// Sparse set of member identifiers.
///
/// Clusters are kept sorted by index and only non-empty clusters are stored.
/// Bits are merged with OR, so a set only ever grows.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct ParticipantSet {
    #[max_len(MAX_PARTICIPANT_CLUSTERS)]
    pub clusters: Vec<Cluster>,     // 4 + (18 * MAX_PARTICIPANT_CLUSTERS) bytes
}

/// Split an identifier into its (cluster index, bit position) pair
pub fn locate(id: u16) -> (u16, u32) {
    let id = id as u32;
    ((id / CLUSTER_WIDTH) as u16, id % CLUSTER_WIDTH)
}

/// Bits `[start, start + len)` of a cluster
fn window_mask(start: u32, len: u32) -> u128 {
    if len == 0 {
        return 0;
    }
    if len >= CLUSTER_WIDTH {
        return u128::MAX << start;
    }
    ((1u128 << len) - 1) << start
}

impl ParticipantSet {
    /// OR `bits` into the cluster at `index`, returning how many identifiers were new
    pub fn merge(&mut self, index: u16, bits: u128) -> Result<u32> {
        require!(
            (index as u32) < MAX_CLUSTER_INDEX,
            SayDaoError::InvalidCluster
        );

        if bits == 0 {
            return Ok(0);
        }

        match self.clusters.binary_search_by_key(&index, |c| c.index) {
            Ok(pos) => {
                let cluster = &mut self.clusters[pos];
                let added = (bits & !cluster.bits).count_ones();
                cluster.bits |= bits;
                Ok(added)
            }
            Err(pos) => {
                // index < MAX_CLUSTER_INDEX == MAX_PARTICIPANT_CLUSTERS, so this always fits
                self.clusters.insert(pos, Cluster { index, bits });
                Ok(bits.count_ones())
            }
        }
    }

    /// Add a single identifier, returning false if it was already present
    pub fn insert(&mut self, id: u16) -> Result<bool> {
        let (index, bit) = locate(id);
        Ok(self.merge(index, 1u128 << bit)? == 1)
    }

    pub fn contains(&self, id: u16) -> bool {
        let (index, bit) = locate(id);
        (self.bits_at(index) >> bit) & 1 == 1
    }

    /// Stored bits of a cluster, zero if the cluster was never touched
    pub fn bits_at(&self, index: u16) -> u128 {
        self.clusters
            .binary_search_by_key(&index, |c| c.index)
            .map(|pos| self.clusters[pos].bits)
            .unwrap_or(0)
    }

    /// Total number of identifiers in the set
    pub fn count(&self) -> u32 {
        self.clusters.iter().map(|c| c.bits.count_ones()).sum()
    }
}

/// Position of the next identifier the distribution has not scanned yet.
///
/// Everything strictly below `(cluster, offset)` has been credited and the
/// cursor never moves backwards. A batch may stop in the middle of a cluster.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct DistributionCursor {
    pub cluster: u16,               // 2 bytes
    pub offset: u8,                 // 1 byte
}

impl DistributionCursor {
    /// Bits of `cluster` that lie at or after the cursor
    pub fn unscanned(&self, cluster: &Cluster) -> u128 {
        if cluster.index < self.cluster {
            0
        } else if cluster.index == self.cluster {
            cluster.bits & window_mask(self.offset as u32, CLUSTER_WIDTH - self.offset as u32)
        } else {
            cluster.bits
        }
    }
}

/// Outcome of scanning one distribution batch
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistributionBatch {
    /// Identifiers to credit, ascending
    pub recipients: Vec<u16>,
    /// Cursor after the batch
    pub cursor: DistributionCursor,
}

impl ParticipantSet {
    /// Scan up to `budget` identifier positions starting at `cursor`.
    ///
    /// Only stored clusters cost budget; gaps between them are skipped. The
    /// returned cursor sits right after the last scanned position.
    pub fn scan(&self, cursor: DistributionCursor, budget: u32) -> DistributionBatch {
        let mut recipients = Vec::new();
        let mut next = cursor;
        let mut budget = budget;

        for cluster in self.clusters.iter().filter(|c| c.index >= cursor.cluster) {
            if budget == 0 {
                break;
            }

            // Step 1: Work out where scanning starts inside this cluster
            let start = if cluster.index == cursor.cluster {
                cursor.offset as u32
            } else {
                0
            };

            // Step 2: Take as much of the cluster as the budget allows
            let len = budget.min(CLUSTER_WIDTH - start);
            let mut found = cluster.bits & window_mask(start, len);

            // Step 3: Collect set bits, lowest first
            while found != 0 {
                let bit = found.trailing_zeros();
                recipients.push((cluster.index as u32 * CLUSTER_WIDTH + bit) as u16);
                found &= found - 1;
            }

            // Step 4: Move the cursor past what was scanned
            budget -= len;
            let end = start + len;
            next = if end == CLUSTER_WIDTH {
                DistributionCursor {
                    cluster: cluster.index + 1,
                    offset: 0,
                }
            } else {
                DistributionCursor {
                    cluster: cluster.index,
                    offset: end as u8,
                }
            };
        }

        DistributionBatch {
            recipients,
            cursor: next,
        }
    }

    /// Number of stored clusters that still hold unscanned set bits
    pub fn remaining_clusters(&self, cursor: DistributionCursor) -> u32 {
        self.clusters
            .iter()
            .filter(|c| cursor.unscanned(c) != 0)
            .count() as u32
    }

    /// Unscanned bits of the first cluster at or after the cursor that has any
    pub fn next_bitmap(&self, cursor: DistributionCursor) -> u128 {
        self.clusters
            .iter()
            .map(|c| cursor.unscanned(c))
            .find(|bits| *bits != 0)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(ids: &[u16]) -> ParticipantSet {
        let mut set = ParticipantSet::default();
        for id in ids {
            set.insert(*id).unwrap();
        }
        set
    }

    #[test]
    fn locate_splits_identifier() {
        assert_eq!(locate(0), (0, 0));
        assert_eq!(locate(127), (0, 127));
        assert_eq!(locate(128), (1, 0));
        assert_eq!(locate(666), (5, 26));
        assert_eq!(locate(u16::MAX), (511, 127));
    }

    #[test]
    fn merge_is_idempotent_and_monotone() {
        let mut set = ParticipantSet::default();
        assert_eq!(set.merge(0, 0b10110).unwrap(), 3);
        assert_eq!(set.merge(0, 0b10110).unwrap(), 0);
        assert_eq!(set.count(), 3);

        // A superset only adds the new bits
        assert_eq!(set.merge(0, 0b11110).unwrap(), 1);
        assert_eq!(set.count(), 4);

        // A subset never clears anything
        set.merge(0, 0b10).unwrap();
        assert_eq!(set.bits_at(0), 0b11110);
    }

    #[test]
    fn clusters_stay_sorted() {
        let mut set = ParticipantSet::default();
        set.merge(5, 1).unwrap();
        set.merge(0, 1).unwrap();
        set.merge(3, 1).unwrap();
        let order: Vec<u16> = set.clusters.iter().map(|c| c.index).collect();
        assert_eq!(order, vec![0, 3, 5]);
    }

    #[test]
    fn empty_bitmaps_are_not_stored() {
        let mut set = ParticipantSet::default();
        assert_eq!(set.merge(7, 0).unwrap(), 0);
        assert!(set.clusters.is_empty());
    }

    #[test]
    fn merge_rejects_out_of_range_cluster() {
        let mut set = ParticipantSet::default();
        assert_eq!(
            set.merge(MAX_CLUSTER_INDEX as u16, 1).unwrap_err(),
            SayDaoError::InvalidCluster.into()
        );
    }

    #[test]
    fn every_cluster_in_range_fits() {
        let mut set = ParticipantSet::default();
        for index in 0..MAX_CLUSTER_INDEX as u16 {
            set.merge(index, 1).unwrap();
        }
        assert_eq!(set.clusters.len(), MAX_PARTICIPANT_CLUSTERS);
        assert_eq!(set.count(), MAX_CLUSTER_INDEX);
        // Existing clusters still accept bits
        assert_eq!(set.merge(0, 0b10).unwrap(), 1);
    }

    #[test]
    fn insert_and_contains() {
        let mut set = ParticipantSet::default();
        assert!(set.insert(666).unwrap());
        assert!(!set.insert(666).unwrap());
        assert!(set.contains(666));
        assert!(!set.contains(665));
        assert!(!set.contains(1));
    }

    #[test]
    fn scan_splits_a_cluster_across_batches() {
        let set = set_of(&[3, 100]);
        let first = set.scan(DistributionCursor::default(), 64);
        assert_eq!(first.recipients, vec![3]);
        assert_eq!(first.cursor, DistributionCursor { cluster: 0, offset: 64 });
        assert_eq!(set.remaining_clusters(first.cursor), 1);
        assert_eq!(set.next_bitmap(first.cursor), 1u128 << 100);

        let second = set.scan(first.cursor, 64);
        assert_eq!(second.recipients, vec![100]);
        assert_eq!(second.cursor, DistributionCursor { cluster: 1, offset: 0 });
        assert_eq!(set.remaining_clusters(second.cursor), 0);
        assert_eq!(set.next_bitmap(second.cursor), 0);
    }

    #[test]
    fn scan_consumes_several_clusters_in_one_batch() {
        let set = set_of(&[1, 130, 300]);
        let batch = set.scan(DistributionCursor::default(), 1_000);
        assert_eq!(batch.recipients, vec![1, 130, 300]);
        assert_eq!(batch.cursor, DistributionCursor { cluster: 3, offset: 0 });
        assert_eq!(set.remaining_clusters(batch.cursor), 0);
    }

    #[test]
    fn scan_skips_gaps_between_clusters() {
        let set = set_of(&[1, 2, 4, 666]);
        let first = set.scan(DistributionCursor::default(), 128);
        assert_eq!(first.recipients, vec![1, 2, 4]);
        assert_eq!(set.remaining_clusters(first.cursor), 1);
        assert_eq!(set.next_bitmap(first.cursor), 1u128 << 26);

        let second = set.scan(first.cursor, 128);
        assert_eq!(second.recipients, vec![666]);
        assert_eq!(set.remaining_clusters(second.cursor), 0);
    }

    #[test]
    fn scan_past_the_end_is_a_no_op() {
        let set = set_of(&[1]);
        let done = set.scan(DistributionCursor::default(), 128).cursor;
        let again = set.scan(done, 128);
        assert!(again.recipients.is_empty());
        assert_eq!(again.cursor, done);
    }

    #[test]
    fn next_bitmap_hides_scanned_bits() {
        let set = set_of(&[0, 1, 2, 3]);
        let batch = set.scan(DistributionCursor::default(), 2);
        assert_eq!(batch.recipients, vec![0, 1]);
        assert_eq!(set.next_bitmap(batch.cursor), 0b1100);
    }

    #[test]
    fn every_participant_is_scanned_once_for_any_budget() {
        let ids = [0u16, 1, 2, 4, 127, 128, 300, 666, 4_000, (MAX_MEMBER_ID - 1) as u16];
        let set = set_of(&ids);

        for budget in [1u32, 3, 64, 127, 128, 129, 500, 100_000] {
            let mut cursor = DistributionCursor::default();
            let mut credited = Vec::new();
            while set.remaining_clusters(cursor) > 0 {
                let batch = set.scan(cursor, budget);
                assert_ne!(batch.cursor, cursor);
                credited.extend(batch.recipients);
                cursor = batch.cursor;
            }
            assert_eq!(credited, ids.to_vec(), "budget {}", budget);
        }
    }
}
