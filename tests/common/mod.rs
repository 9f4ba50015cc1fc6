//! Shared fixtures for integration tests.
#![allow(dead_code)]

use player_guesser_web::{PlayerRecord, Role};

pub fn player(
    name: &str,
    age: u32,
    roles: &[Role],
    nationality: &str,
    continent: &str,
    club: &str,
    majors: u32,
) -> PlayerRecord {
    PlayerRecord {
        name: name.to_string(),
        age: Some(age),
        roles: roles.iter().cloned().collect(),
        nationality: Some(nationality.to_string()),
        continent: Some(continent.to_string()),
        club: club.to_string(),
        major_participations: majors,
    }
}

pub fn s1mple() -> PlayerRecord {
    player("s1mple", 27, &[Role::Rifler], "Ukraine", "Europe", "NAVI", 3)
}

pub fn niko() -> PlayerRecord {
    player(
        "NiKo",
        27,
        &[Role::Rifler, Role::InGameLeader],
        "Bosnia and Herzegovina",
        "Europe",
        "Falcons",
        14,
    )
}

pub fn zywoo() -> PlayerRecord {
    player("ZywOo", 24, &[Role::Awper], "France", "Europe", "Vitality", 6)
}

pub fn retired_legend() -> PlayerRecord {
    player("GeT_RiGhT", 34, &[Role::Lurker], "Sweden", "Europe", "N/A", 15)
}
