use jiff::Timestamp;

use crate::models::{MediaId, MediaRecord, Platform, Status};

struct SeedEntry {
    id: &'static str,
    title: &'static str,
    year: i16,
    description: &'static str,
    status: Status,
    platform: Platform,
    platform_other: &'static str,
    cover: &'static str,
}

const SEED: [SeedEntry; 6] = [
    SeedEntry {
        id: "1",
        title: "Breaking Bad",
        year: 2008,
        description: "A high school chemistry teacher with terminal cancer teams up with a former \
                      student to cook and sell methamphetamine.",
        status: Status::Watched,
        platform: Platform::Netflix,
        platform_other: "",
        cover: "https://image.tmdb.org/t/p/w500/ggFHVNu6YYI5L9pCfOacjizRGt.jpg",
    },
    SeedEntry {
        id: "2",
        title: "The Sopranos",
        year: 1999,
        description: "New Jersey mob boss Tony Soprano tries to balance the demands of his crime \
                      family with those of his own.",
        status: Status::Watched,
        platform: Platform::Hbo,
        platform_other: "",
        cover: "https://image.tmdb.org/t/p/w500/reEMJA1uzscCbkpeRJeTT2bjqUp.jpg",
    },
    SeedEntry {
        id: "3",
        title: "Better Call Saul",
        year: 2015,
        description: "Small-time lawyer Jimmy McGill slowly becomes the criminal attorney Saul \
                      Goodman.",
        status: Status::Paused,
        platform: Platform::Netflix,
        platform_other: "",
        cover: "https://image.tmdb.org/t/p/w500/suaEOtk1N1sgg2MTM7oZd2cfVp3.jpg",
    },
    SeedEntry {
        id: "4",
        title: "Mad Men",
        year: 2007,
        description: "The lives of the most successful admen on Madison Avenue in the 1960s.",
        status: Status::ToWatch,
        platform: Platform::Unset,
        platform_other: "",
        cover: "https://image.tmdb.org/t/p/w500/r7r8I9qGc8pTq2dH2uWxXj3L9H.jpg",
    },
    SeedEntry {
        id: "5",
        title: "The Wire",
        year: 2002,
        description: "Baltimore seen through the eyes of police, drug dealers, politicians and \
                      the press.",
        status: Status::Dropped,
        platform: Platform::Hbo,
        platform_other: "",
        cover: "https://image.tmdb.org/t/p/w500/2Tm5W3Z7T3p3X3p3X3p3X3p3X3p3X3.jpg",
    },
    SeedEntry {
        id: "6",
        title: "Severance",
        year: 2022,
        description: "Office workers undergo a procedure that separates their work memories from \
                      their private lives.",
        status: Status::Watched,
        platform: Platform::Other,
        platform_other: "Apple TV+",
        cover: "https://image.tmdb.org/t/p/w500/7vjaCdMw15FEbXyLQTVa04URsPm.jpg",
    },
];

/// The example collection written to an empty slot.
pub fn seed_records(now: Timestamp) -> Vec<MediaRecord> {
    SEED.iter()
        .map(|entry| MediaRecord {
            id: MediaId::from(entry.id),
            title: entry.title.to_string(),
            year: entry.year,
            description: entry.description.to_string(),
            status: entry.status,
            platform: entry.platform,
            platform_other: entry.platform_other.to_string(),
            cover: entry.cover.to_string(),
            created_at: now,
            updated_at: now,
        })
        .collect()
}
