use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
	pub col: usize,
}

impl fmt::Display for Location {
	fn fmt<'f>(&self, f: &'f mut fmt::Formatter) -> fmt::Result {
		write!(f, "col {}", self.col + 1)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'x> {
	pub start: Location,
	pub text: &'x str,
}

/// Splits a pattern into whitespace separated words.
pub struct Lexer<'x> {
	input: &'x str,
	// The location of the next char in the input.
	location: Location,
}

impl<'x> Lexer<'x> {
	pub fn new(input: &'x str) -> Self {
		Self {
			input,
			location: Location { col: 0 },
		}
	}

	fn skip_whitespace(&mut self) {
		let head = match self.input.find(|c: char| !c.is_whitespace()) {
			Some(v) => {
				let (head, tail) = self.input.split_at(v);
				self.input = tail;
				head
			}
			None => {
				let head = self.input;
				self.input = &""[..];
				head
			}
		};
		self.location.col += head.chars().count();
	}

	fn lex_word(&mut self) -> Word<'x> {
		let start = self.location;
		let text = match self.input.find(|c: char| c.is_whitespace()) {
			Some(end) => {
				let (text, tail) = self.input.split_at(end);
				self.input = tail;
				text
			}
			None => {
				// the rest of the input is the word
				let mut text: &'x str = &""[..];
				std::mem::swap(&mut text, &mut self.input);
				text
			}
		};
		self.location.col += text.chars().count();
		Word { start, text }
	}
}

impl<'x> Iterator for Lexer<'x> {
	type Item = Word<'x>;

	fn next(&mut self) -> Option<Self::Item> {
		self.skip_whitespace();
		if self.input.is_empty() {
			return None;
		}
		Some(self.lex_word())
	}
}
