use super::error::BillsumError;

/// Sequential invoice number generator.
///
/// Generates invoice numbers in the format `{prefix}{sequential}`,
/// e.g. "INV-000001", "INV-000002", etc.
#[derive(Debug, Clone)]
pub struct InvoiceNumberSequence {
    prefix: String,
    next_number: u64,
    zero_pad: usize,
}

impl Default for InvoiceNumberSequence {
    fn default() -> Self {
        Self::new("INV-")
    }
}

impl InvoiceNumberSequence {
    /// Create a new sequence starting at 1.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next_number: 1,
            zero_pad: 6,
        }
    }

    /// Create a sequence continuing from a given number.
    pub fn starting_at(prefix: impl Into<String>, next_number: u64) -> Result<Self, BillsumError> {
        if next_number == 0 {
            return Err(BillsumError::Numbering(
                "sequence must start at 1 or above".into(),
            ));
        }
        Ok(Self {
            prefix: prefix.into(),
            next_number,
            zero_pad: 6,
        })
    }

    /// Continue after the highest number already issued.
    ///
    /// Only the trailing digit run of each existing number is considered, so
    /// numbers issued under another prefix still count. Numbers without
    /// trailing digits are ignored.
    pub fn from_existing<'a, I>(prefix: impl Into<String>, existing: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let max = existing
            .into_iter()
            .filter_map(trailing_number)
            .max()
            .unwrap_or(0);
        Self {
            prefix: prefix.into(),
            next_number: max.saturating_add(1),
            zero_pad: 6,
        }
    }

    /// Set zero-padding width (default: 6, so "000001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    /// Generate the next invoice number.
    pub fn next_number(&mut self) -> String {
        let number = self.peek();
        self.next_number = self.next_number.saturating_add(1);
        number
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        format!(
            "{}{:0>width$}",
            self.prefix,
            self.next_number,
            width = self.zero_pad
        )
    }

    /// Get the next number that will be issued (without prefix/formatting).
    pub fn next_raw(&self) -> u64 {
        self.next_number
    }
}

/// Parse the trailing run of ASCII digits, e.g. "INV-000042" → 42.
fn trailing_number(number: &str) -> Option<u64> {
    let trimmed = number.trim_end();
    let start = trimmed
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;
    trimmed[start..].parse().ok()
}
