const UNIT: u64 = 1024;
const UNIT_PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

/// Raw byte count with a human-readable binary-prefix rendering
///
/// Counts below 1 KB render as `"<n> Bytes"`. Larger counts render with two
/// decimals and the largest unit whose integer quotient stays below 1024,
/// e.g. `"976.56 KB"`. Rounding is half-to-even on the exact quotient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteSize(u64);

impl ByteSize {
    pub fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> u64 {
        self.0
    }

    pub fn pretty(&self) -> String {
        let bytes = self.0;
        if bytes < UNIT {
            return format!("{} Bytes", bytes);
        }

        let mut divisor = UNIT as u128;
        let mut exp = 0;
        let mut quotient = bytes / UNIT;
        while quotient >= UNIT && exp + 1 < UNIT_PREFIXES.len() {
            divisor *= UNIT as u128;
            exp += 1;
            quotient /= UNIT;
        }

        let scaled = bytes as u128 * 100;
        let mut hundredths = scaled / divisor;
        let remainder = scaled % divisor;
        if remainder * 2 > divisor || (remainder * 2 == divisor && hundredths % 2 == 1) {
            hundredths += 1;
        }

        format!(
            "{}.{:02} {}B",
            hundredths / 100,
            hundredths % 100,
            UNIT_PREFIXES[exp]
        )
    }
}

impl From<u64> for ByteSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}

impl std::fmt::Display for ByteSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pretty())
    }
}
