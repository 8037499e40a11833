use crate::ast::{Operand, Operator};
use crate::engine::PluralForms;
use crate::error::{HeaderError, ParseError};
use crate::parser::ParseOptions;
use log::warn;
use std::str::FromStr;

const LABEL: &str = "plural-forms:";

/// The value of a PO file `Plural-Forms` header, e.g.
/// `nplurals=2; plural=n != 1;`.
///
/// ```
/// use plural_forms::PluralRule;
///
/// let rule: PluralRule = "nplurals=3; plural=n == 1 ? 0 : n == 2 ? 1 : 2;".parse()?;
/// assert_eq!(rule.nplurals(), 3);
/// assert_eq!(rule.index(2), 1);
/// # Ok::<(), plural_forms::HeaderError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PluralRule {
    nplurals: u32,
    forms: PluralForms,
}

impl PluralRule {
    pub fn parse(header: &str) -> Result<Self, HeaderError> {
        Self::parse_with(header, &ParseOptions::default())
    }

    /// Parses a header value. A leading `Plural-Forms:` label is accepted.
    /// Offsets in a returned [`HeaderError::Expression`] are relative to
    /// `header`.
    pub fn parse_with(header: &str, options: &ParseOptions) -> Result<Self, HeaderError> {
        let body_start = label_len(header);
        let mut nplurals = None;
        let mut forms = None;

        let mut seg_start = body_start;
        for segment in header[body_start..].split(';') {
            let start = seg_start;
            seg_start += segment.len() + 1;
            if segment.trim().is_empty() {
                continue;
            }
            let Some((key, value)) = segment.split_once('=') else {
                return Err(HeaderError::UnknownKey(segment.trim().to_string()));
            };
            match key.trim() {
                "nplurals" => {
                    let value = value.trim();
                    let count = value
                        .parse::<u32>()
                        .map_err(|_| HeaderError::InvalidNplurals(value.to_string()))?;
                    if count == 0 {
                        return Err(HeaderError::ZeroNplurals);
                    }
                    nplurals = Some(count);
                }
                "plural" => {
                    let value_start = start + key.len() + 1;
                    let parsed = PluralForms::parse_with(value.trim(), options).map_err(|e| {
                        let leading = value.len() - value.trim_start().len();
                        ParseError::new(e.offset + value_start + leading, e.expected_rule)
                    })?;
                    forms = Some(parsed);
                }
                other => return Err(HeaderError::UnknownKey(other.to_string())),
            }
        }

        Ok(Self {
            nplurals: nplurals.ok_or(HeaderError::MissingKey("nplurals"))?,
            forms: forms.ok_or(HeaderError::MissingKey("plural"))?,
        })
    }

    pub fn nplurals(&self) -> u32 {
        self.nplurals
    }

    pub fn forms(&self) -> &PluralForms {
        &self.forms
    }

    /// Plural-category index for `n`. Out-of-range results and evaluation
    /// faults fall back to index 0.
    pub fn index(&self, n: u32) -> u32 {
        match self.forms.try_evaluate(n) {
            Ok(i) if i < self.nplurals => i,
            Ok(i) => {
                warn!(
                    "plural index {} out of range for nplurals={} (n = {}); using 0",
                    i, self.nplurals, n
                );
                0
            }
            Err(e) => {
                warn!("plural expression `{}` failed for n = {}: {}; using 0", self.forms.source(), n, e);
                0
            }
        }
    }
}

/// `nplurals=2; plural=n != 1;`, the rule used when a catalog has no header.
impl Default for PluralRule {
    fn default() -> Self {
        let ast = Operand::chain(
            Operand::variable("n"),
            vec![(Operator::Ne, Operand::literal(1))],
        );
        Self {
            nplurals: 2,
            forms: PluralForms::from_parts("n != 1", ast),
        }
    }
}

impl FromStr for PluralRule {
    type Err = HeaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn label_len(header: &str) -> usize {
    let trimmed = header.trim_start();
    let skipped = header.len() - trimmed.len();
    match trimmed.get(..LABEL.len()) {
        Some(head) if head.eq_ignore_ascii_case(LABEL) => skipped + LABEL.len(),
        _ => 0,
    }
}
