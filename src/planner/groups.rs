use crate::types::{GroupArrangements, Subgroup};

/// Largest number of people in one subgroup.
pub const SUBGROUP_SIZE: usize = 4;

/// Split `[leader, ...members]` into consecutive subgroups, numbered from 1.
pub fn group_arrangements(leader: &str, members: &[String]) -> GroupArrangements {
    let everyone: Vec<String> = std::iter::once(leader.to_string())
        .chain(members.iter().cloned())
        .collect();

    let subgroups = everyone
        .chunks(SUBGROUP_SIZE)
        .enumerate()
        .map(|(idx, chunk)| Subgroup {
            group_number: idx + 1,
            members: chunk.to_vec(),
        })
        .collect();

    GroupArrangements {
        leader: leader.to_string(),
        members: members.to_vec(),
        subgroups,
    }
}
