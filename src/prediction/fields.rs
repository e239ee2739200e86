//! Form fields accepted by the prediction service and slider value formatting.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Continuous score; rendered as a range input when tracked.
    Score,
    /// Small integer scale rendered as a select.
    Rating,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl FieldSpec {
    /// Attribute form of `step`, as the range input carries it.
    pub fn step_attr(&self) -> String {
        format_number(self.step)
    }

    pub fn default_text(&self) -> String {
        format_number(self.default)
    }

    /// Id of the label element that mirrors a slider's value.
    pub fn value_label_id(&self) -> String {
        format!("{}_value", self.name)
    }
}

/// Numeric features in the order the service's model consumes them. The
/// research toggle is handled separately.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "gre_score",
        label: "GRE Score",
        kind: FieldKind::Score,
        min: 260.0,
        max: 340.0,
        step: 1.0,
        default: 316.0,
    },
    FieldSpec {
        name: "toefl_score",
        label: "TOEFL Score",
        kind: FieldKind::Score,
        min: 0.0,
        max: 120.0,
        step: 1.0,
        default: 107.0,
    },
    FieldSpec {
        name: "university_rating",
        label: "University Rating",
        kind: FieldKind::Rating,
        min: 1.0,
        max: 5.0,
        step: 1.0,
        default: 3.0,
    },
    FieldSpec {
        name: "sop",
        label: "Statement of Purpose",
        kind: FieldKind::Score,
        min: 1.0,
        max: 5.0,
        step: 0.5,
        default: 3.5,
    },
    FieldSpec {
        name: "lor",
        label: "Letter of Recommendation",
        kind: FieldKind::Score,
        min: 1.0,
        max: 5.0,
        step: 0.5,
        default: 3.5,
    },
    FieldSpec {
        name: "cgpa",
        label: "Undergraduate CGPA",
        kind: FieldKind::Score,
        min: 6.0,
        max: 10.0,
        step: 0.01,
        default: 8.5,
    },
];

pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.name == name)
}

/// Parses a form value the way the browser's `parseFloat` would treat a
/// well-formed number. Anything unparseable becomes NaN.
pub fn parse_field_value(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Text for a slider's value label: two decimals when the slider moves in
/// fractional steps, otherwise the value as-is. A missing or unparseable
/// `step` counts as whole steps.
pub fn format_slider_value(step: Option<&str>, value: &str) -> String {
    let step = step.map(parse_field_value).unwrap_or(f64::NAN);
    let value = parse_field_value(value);
    if step < 1.0 {
        to_fixed(value, 2)
    } else {
        format_number(value)
    }
}

/// Shortest numeric form: `320`, `3.5`, `NaN`, `Infinity`.
pub fn format_number(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    value.to_string()
}

/// Digits past the point that cover the exact decimal expansion of any f64.
const EXACT_FRACTION_DIGITS: usize = 1075;

/// Fixed-point text matching the browser's `Number.prototype.toFixed`:
/// rounds half-up on the exact decimal value and never prints `-0.00`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return format_number(value);
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();

    if frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5') {
        // Carry the increment leftwards through any trailing nines
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let mut text = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        text.push('-');
    }
    text.push_str(std::str::from_utf8(&kept[..split]).unwrap_or("0"));
    if digits > 0 {
        text.push('.');
        text.push_str(std::str::from_utf8(&kept[split..]).unwrap_or(""));
    }
    text
}
