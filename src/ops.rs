//! Remap operation descriptors
//!
//! A remap operation is a compact string of the form
//! `[from-letter][from-color][to-letter][to-color]`, every part optional:
//! `WS` remaps every Wood block to Stone, `W9S5` remaps Wood blocks painted
//! with color 9 to Stone repainted with color 5.

use std::iter::Peekable;
use std::str::Chars;

use crate::database::MaterialLetters;

/// One parsed remap operation.
///
/// Optional on every side: an unset color matches (or leaves) any paint
/// index, and a directive missing either base block is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemapDirective {
    /// Base block GUID the remap applies to.
    pub from_base_block: Option<String>,
    /// Restrict the remap to slots painted with this color index.
    pub from_color: Option<u32>,
    /// Base block GUID to remap matching slots to.
    pub to_base_block: Option<String>,
    /// Repaint remapped slots with this color index.
    pub to_color: Option<u32>,
}

impl RemapDirective {
    /// A directive without both material sides has nothing to do.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.from_base_block.is_none() || self.to_base_block.is_none()
    }
}

/// Parse an operation descriptor against the material letter table.
///
/// Parts are consumed left to right with greedy digit runs. The letter
/// position is consumed once reached whether or not it names a known
/// material, so an unrecognized character leaves that material side unset
/// without derailing the rest of the descriptor.
#[must_use]
pub fn parse_directive(text: &str, letters: &MaterialLetters) -> RemapDirective {
    let mut chars = text.chars().peekable();

    let from_base_block = take_material(&mut chars, letters);
    let from_color = take_color(&mut chars);
    let to_base_block = take_material(&mut chars, letters);
    let to_color = take_color(&mut chars);

    RemapDirective {
        from_base_block,
        from_color,
        to_base_block,
        to_color,
    }
}

fn take_material(chars: &mut Peekable<Chars<'_>>, letters: &MaterialLetters) -> Option<String> {
    let letter = chars.next()?;
    letters.lookup(letter).map(str::to_string)
}

fn take_color(chars: &mut Peekable<Chars<'_>>) -> Option<u32> {
    let mut digits = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    digits.parse().ok()
}
