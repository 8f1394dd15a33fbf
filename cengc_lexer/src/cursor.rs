/// Sentinel returned by the lookahead methods at end of input.
const EOF: u8 = b'\0';

/// Forward-only byte cursor over the source text.
///
/// Recognizers advance the cursor by exactly the bytes they consume, so the
/// dispatch loop never has to compensate for overstepping.
#[derive(Debug)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Byte offset of the next unconsumed byte.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Next byte without consuming it.
    pub fn first(&self) -> u8 {
        self.input.get(self.pos).copied().unwrap_or(EOF)
    }

    /// Byte after `first()` without consuming anything.
    pub fn second(&self) -> u8 {
        self.input.get(self.pos + 1).copied().unwrap_or(EOF)
    }

    pub fn bump(&mut self) -> Option<u8> {
        let c = self.input.get(self.pos).copied()?;
        self.pos += 1;
        Some(c)
    }

    pub fn eat_while(&mut self, mut predicate: impl FnMut(u8) -> bool) {
        while !self.is_eof() && predicate(self.first()) {
            self.bump();
        }
    }
}
