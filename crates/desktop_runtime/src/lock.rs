//! PIN keypad state for the lock screen.

/// PIN accepted by the lock screen.
pub const UNLOCK_PIN: &str = "1234";
/// Maximum number of digits the keypad accepts.
pub const PIN_LENGTH: usize = 4;
/// How long a rejected PIN keeps the error state before the keypad resets it.
pub const ERROR_RESET_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// One keypad or keyboard input.
pub enum KeypadKey {
    Digit(u8),
    Clear,
    Submit,
    Backspace,
}

impl KeypadKey {
    /// On-screen keypad layout, row by row.
    pub const PAD: [Self; 12] = [
        Self::Digit(1),
        Self::Digit(2),
        Self::Digit(3),
        Self::Digit(4),
        Self::Digit(5),
        Self::Digit(6),
        Self::Digit(7),
        Self::Digit(8),
        Self::Digit(9),
        Self::Clear,
        Self::Digit(0),
        Self::Submit,
    ];

    pub fn label(self) -> String {
        match self {
            Self::Digit(digit) => digit.to_string(),
            Self::Clear => "C".to_string(),
            Self::Submit => ">".to_string(),
            Self::Backspace => "<".to_string(),
        }
    }

    /// Maps a `KeyboardEvent.key` value to a keypad input.
    pub fn from_keyboard(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Submit),
            "Backspace" => Some(Self::Backspace),
            "Escape" => Some(Self::Clear),
            _ => {
                let mut chars = key.chars();
                let digit = chars.next()?.to_digit(10)?;
                if chars.next().is_some() {
                    return None;
                }
                u8::try_from(digit).ok().map(Self::Digit)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of one keypad press.
pub enum PadOutcome {
    Pending,
    Unlocked,
    /// The PIN was wrong. The caller clears the error after [`ERROR_RESET_MS`].
    Rejected,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockPad {
    digits: String,
    error: bool,
}

impl LockPad {
    pub fn digits_entered(&self) -> usize {
        self.digits.len()
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Applies one input. A successful submit resets the pad.
    pub fn press(&mut self, key: KeypadKey) -> PadOutcome {
        match key {
            KeypadKey::Digit(digit) => {
                if self.digits.len() < PIN_LENGTH && digit <= 9 {
                    self.digits.push(char::from(b'0' + digit));
                    self.error = false;
                }
                PadOutcome::Pending
            }
            KeypadKey::Backspace => {
                self.digits.pop();
                PadOutcome::Pending
            }
            KeypadKey::Clear => {
                self.digits.clear();
                self.error = false;
                PadOutcome::Pending
            }
            KeypadKey::Submit => {
                let accepted = self.digits == UNLOCK_PIN;
                self.digits.clear();
                if accepted {
                    self.error = false;
                    PadOutcome::Unlocked
                } else {
                    self.error = true;
                    PadOutcome::Rejected
                }
            }
        }
    }

    pub fn clear_error(&mut self) {
        self.error = false;
    }
}
