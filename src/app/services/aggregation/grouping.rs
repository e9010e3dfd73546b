//! District grouping for estate lists

use std::collections::HashMap;

use crate::app::models::{DistrictGroup, Kebun};

/// Partition estates by district
///
/// Groups appear in the order their district is first seen; estates keep their
/// source order inside each group. Blank districts collect under `UNKNOWN`.
pub fn group_by_district<'a>(kebuns: impl IntoIterator<Item = &'a Kebun>) -> Vec<DistrictGroup> {
    let mut groups: Vec<DistrictGroup> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for kebun in kebuns {
        let key = kebun.district_key();
        match positions.get(key) {
            Some(&position) => groups[position].kebuns.push(kebun.clone()),
            None => {
                positions.insert(key.to_string(), groups.len());
                groups.push(DistrictGroup {
                    distrik: key.to_string(),
                    kebuns: vec![kebun.clone()],
                });
            }
        }
    }

    groups
}

/// Estates of all groups, in group order
pub fn flatten_groups(groups: &[DistrictGroup]) -> impl Iterator<Item = &Kebun> {
    groups.iter().flat_map(|group| group.kebuns.iter())
}
