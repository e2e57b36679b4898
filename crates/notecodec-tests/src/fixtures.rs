//! Shared note name fixtures.

/// A note name with the chromatic index it must resolve to.
#[derive(Debug, Clone, Copy)]
pub struct IndexCase {
    pub input: &'static str,
    pub index: i32,
}

/// Valid note names and their chromatic indices under the strict policy.
pub const VALID_NOTES: &[IndexCase] = &[
    IndexCase { input: "C-1", index: 0 },
    IndexCase { input: "C0", index: 12 },
    IndexCase { input: "C4", index: 60 },
    IndexCase { input: "c4", index: 60 },
    IndexCase { input: "C#4", index: 61 },
    IndexCase { input: "c#4", index: 61 },
    IndexCase { input: "Db4", index: 61 },
    IndexCase { input: "Eb4", index: 63 },
    IndexCase { input: "A4", index: 69 },
    IndexCase { input: "Bb3", index: 58 },
    IndexCase { input: "bb3", index: 58 },
    IndexCase { input: "G9", index: 127 },
    IndexCase { input: "C10", index: 132 },
];

/// Note names every policy rejects, with the expected error code.
pub const INVALID_NOTES: &[(&str, &str)] = &[
    ("", "N001"),
    ("H4", "N001"),
    ("E#4", "N001"),
    ("C", "N002"),
    ("C#", "N002"),
    ("CX", "N002"),
];

/// Note names whose meaning depends on the accidental policy.
pub const AMBIGUOUS_NOTES: &[&str] = &["CB4", "EB4", "BB3", "AB2"];
