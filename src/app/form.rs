use crate::store::TrackRecord;

/// Editable field of the track form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Id,
    Artist,
    Rating,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::Id => Self::Artist,
            Self::Artist => Self::Rating,
            Self::Rating => Self::Id,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Id => Self::Rating,
            Self::Artist => Self::Id,
            Self::Rating => Self::Artist,
        }
    }

    fn digits_only(self) -> bool {
        matches!(self, Self::Id | Self::Rating)
    }
}

/// The id / artist / rating inputs of the Update Tracks view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackForm {
    pub id: String,
    pub artist: String,
    pub rating: String,
    pub focus: FormField,
}

impl TrackForm {
    /// Fill the inputs from `record`, keeping the focused field.
    pub fn fill(&mut self, record: &TrackRecord) {
        self.id = record.id.clone();
        self.artist = record.artist.clone();
        self.rating = record.rating.to_string();
    }

    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Id => &mut self.id,
            FormField::Artist => &mut self.artist,
            FormField::Rating => &mut self.rating,
        }
    }

    /// Type `c` into the focused field. Id and rating only take digits.
    pub fn push_char(&mut self, c: char) {
        if c.is_control() || (self.focus.digits_only() && !c.is_ascii_digit()) {
            return;
        }
        self.focused_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.focused_mut().pop();
    }
}
