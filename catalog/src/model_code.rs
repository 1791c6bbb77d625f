//! Model-line codes used for filtering and featured-catalog derivations.

#[cfg(test)]
#[path = "model_code_test.rs"]
mod model_code_test;

/// Short identifier of a vehicle line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModelCode {
    Vf6,
    Vf7,
    Vf8,
    Vf9,
}

impl ModelCode {
    /// Every code, in display order.
    pub const ALL: [ModelCode; 4] = [Self::Vf6, Self::Vf7, Self::Vf8, Self::Vf9];

    /// Lowercase filter key (`"vf7"`).
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Vf6 => "vf6",
            Self::Vf7 => "vf7",
            Self::Vf8 => "vf8",
            Self::Vf9 => "vf9",
        }
    }

    /// Display label with the marketing spacing (`"VF 7"`).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Vf6 => "VF 6",
            Self::Vf7 => "VF 7",
            Self::Vf8 => "VF 8",
            Self::Vf9 => "VF 9",
        }
    }

    /// Parse a filter key, case-insensitively. `"VF 7"` and `"vf7"` both parse.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        Self::ALL
            .into_iter()
            .find(|code| code.key().eq_ignore_ascii_case(&compact))
    }

    /// Whether a model string belongs to this line.
    ///
    /// The code is matched in its spaced form (`"vf 7"`) as the catalog
    /// writes model names, and in its compact form (`"vf7"`) for services
    /// that do not.
    #[must_use]
    pub fn matches(self, model: &str) -> bool {
        let model = model.to_lowercase();
        model.contains(&spaced(self.key())) || model.contains(self.key())
    }
}

impl std::fmt::Display for ModelCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Insert a space between the letter prefix and the digits: `"vf7"` -> `"vf 7"`.
#[must_use]
pub fn spaced(code: &str) -> String {
    match code.find(|c: char| c.is_ascii_digit()) {
        Some(split) if split > 0 => format!("{} {}", &code[..split], &code[split..]),
        _ => code.to_owned(),
    }
}
