/*!
Binary boolean operators, and the catalog of all sixteen.

A binary operator is identified by its truth signature: the outputs for the input pairs (T, T), (T, F), (F, T), and (F, F), in that order.
Reading the signature as a binary number, with (T, T) as the most significant bit, gives the index of the operator.
So, index 0 is the operator which is always false, index 15 the operator which is always true, and e.g. index 8 (TFFF) is conjunction.

```rust
# use ttt_lib::structures::operator::Catalog;
let catalog = Catalog::standard();

assert_eq!(catalog.list_operators().len(), 16);
assert_eq!(catalog.display_name(8), Ok("and".to_string()));
assert_eq!(catalog.evaluate(6, true, false), Ok(true));
```

Some operators have no friendly name, and are labelled by their index in lowercase hexadecimal, e.g. `0x2`.
*/

use crate::{misc::log::targets::CATALOG, types::err};

/// The index of an operator in the catalog, in [0, 16).
pub type OperatorIndex = u8;

/// The number of binary boolean operators.
pub const OPERATOR_COUNT: usize = 16;

/// Friendly names by index, with the empty string for an unnamed operator.
const FRIENDLY_NAMES: [&str; OPERATOR_COUNT] = [
    "false", "nor", "", "not A", "", "not B", "xor", "nand", "and", "iff", "B", "->", "A", "", "or",
    "true",
];

/// The outputs of an operator on the input pairs (T, T), (T, F), (F, T), (F, F).
pub type Outputs = [bool; 4];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperatorSignature {
    index: OperatorIndex,
    outputs: Outputs,
    name: Option<&'static str>,
}

impl OperatorSignature {
    fn from_index(index: OperatorIndex) -> Self {
        let outputs = [
            index & 0b1000 != 0,
            index & 0b0100 != 0,
            index & 0b0010 != 0,
            index & 0b0001 != 0,
        ];

        let name = match FRIENDLY_NAMES[index as usize] {
            "" => None,
            name => Some(name),
        };

        OperatorSignature {
            index,
            outputs,
            name,
        }
    }

    /// The position of an input pair in a signature.
    pub fn position_of(left: bool, right: bool) -> usize {
        match (left, right) {
            (true, true) => 0,
            (true, false) => 1,
            (false, true) => 2,
            (false, false) => 3,
        }
    }

    pub fn index(&self) -> OperatorIndex {
        self.index
    }

    pub fn outputs(&self) -> Outputs {
        self.outputs
    }

    /// The friendly name of the operator, if it has one.
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// The friendly name of the operator, or otherwise its index as a hex label.
    pub fn display_name(&self) -> String {
        match self.name {
            Some(name) => name.to_string(),
            None => format!("{:#x}", self.index),
        }
    }

    pub fn apply(&self, left: bool, right: bool) -> bool {
        self.outputs[Self::position_of(left, right)]
    }
}

impl std::fmt::Display for OperatorSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// All sixteen binary boolean operators, in index order.
///
/// The catalog is a plain value.
/// Anything which needs to evaluate an operator is given a reference to a catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    signatures: [OperatorSignature; OPERATOR_COUNT],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    pub fn standard() -> Self {
        Catalog {
            signatures: std::array::from_fn(|index| {
                OperatorSignature::from_index(index as OperatorIndex)
            }),
        }
    }

    /// Every operator, ordered by index.
    pub fn list_operators(&self) -> &[OperatorSignature] {
        &self.signatures
    }

    pub fn get(&self, index: OperatorIndex) -> Result<&OperatorSignature, err::OperatorError> {
        match self.signatures.get(index as usize) {
            Some(signature) => Ok(signature),
            None => {
                log::warn!(target: CATALOG, "Request for operator {index}");
                Err(err::OperatorError::InvalidIndex(index))
            }
        }
    }

    pub fn display_name(&self, index: OperatorIndex) -> Result<String, err::OperatorError> {
        Ok(self.get(index)?.display_name())
    }

    pub fn evaluate(
        &self,
        index: OperatorIndex,
        left: bool,
        right: bool,
    ) -> Result<bool, err::OperatorError> {
        Ok(self.get(index)?.apply(left, right))
    }

    /// The index of the operator picked out by a selector.
    ///
    /// In order of preference, a selector is:
    /// - A friendly name, e.g. `and` or `not A`.
    /// - A hex label, e.g. `0x2`.
    /// - A decimal index, e.g. `8`.
    /// - A friendly name, ignoring case.
    pub fn find(&self, selector: &str) -> Result<OperatorIndex, err::OperatorError> {
        let selector = selector.trim();

        if let Some(signature) = self.signatures.iter().find(|s| s.name == Some(selector)) {
            return Ok(signature.index);
        }

        let index = match selector.strip_prefix("0x") {
            Some(hex) => OperatorIndex::from_str_radix(hex, 16).ok(),
            None => selector.parse::<OperatorIndex>().ok(),
        };

        if let Some(index) = index {
            return self.get(index).map(|signature| signature.index);
        }

        match self.signatures.iter().find(|s| {
            s.name
                .is_some_and(|name| name.eq_ignore_ascii_case(selector))
        }) {
            Some(signature) => Ok(signature.index),
            None => {
                log::debug!(target: CATALOG, "No operator for selector '{selector}'");
                Err(err::OperatorError::UnknownSelector)
            }
        }
    }
}
