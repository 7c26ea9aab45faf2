use std::fmt;

/// Set of lowercase ASCII letters
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct LetterSet {
    // bit is one if letter is in it
    accepted: u32,
}

impl LetterSet {
    pub fn empty() -> Self {
        Self { accepted: 0 }
    }

    /// Whether `c` is a letter a grid may hold
    pub fn is_letter(c: char) -> bool {
        c.is_ascii_lowercase()
    }

    pub fn contains(&self, letter: u8) -> bool {
        match Self::bit(letter) {
            Some(bit) => self.accepted & bit != 0,
            None => false,
        }
    }

    /// Inserts the letter, returning false if it is not in `a..=z`
    pub fn insert(&mut self, letter: u8) -> bool {
        match Self::bit(letter) {
            Some(bit) => {
                self.accepted |= bit;
                true
            }
            None => false,
        }
    }

    /// True when every byte of `word` is a letter of this set
    pub fn covers(&self, word: &[u8]) -> bool {
        word.iter().all(|&b| self.contains(b))
    }

    pub fn len(&self) -> usize {
        self.accepted.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.accepted == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        ('a'..='z').filter(move |&l| self.contains(l as u8))
    }

    fn bit(letter: u8) -> Option<u32> {
        if letter.is_ascii_lowercase() {
            Some(1 << (letter - b'a'))
        } else {
            None
        }
    }
}

impl Default for LetterSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::iter::FromIterator<u8> for LetterSet {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = u8>,
    {
        let mut tmp = Self::default();
        iter.into_iter().for_each(|l| {
            tmp.insert(l);
        });
        tmp
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for l in self.iter() {
            write!(f, "{}", l)?;
        }
        write!(f, "]")
    }
}
