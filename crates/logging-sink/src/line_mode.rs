/// Controls whether a [`WriterSink`](crate::WriterSink) appends a trailing newline to each line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineMode {
    /// Append a newline terminator after each emitted line.
    #[default]
    WithNewline,
    /// Emit the line exactly as given.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether the mode appends a trailing newline when emitting a line.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::LineMode;
    ///
    /// assert!(LineMode::WithNewline.append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}

impl From<bool> for LineMode {
    /// `true` maps to [`LineMode::WithNewline`], `false` to [`LineMode::WithoutNewline`].
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

impl From<LineMode> for bool {
    fn from(mode: LineMode) -> Self {
        mode.append_newline()
    }
}

#[cfg(test)]
mod tests {
    use super::LineMode;

    #[test]
    fn default_appends_newline() {
        assert_eq!(LineMode::default(), LineMode::WithNewline);
    }

    #[test]
    fn bool_conversions_agree_with_append_newline() {
        assert_eq!(LineMode::from(true), LineMode::WithNewline);
        assert_eq!(LineMode::from(false), LineMode::WithoutNewline);

        let append: bool = LineMode::WithNewline.into();
        assert!(append);

        let append: bool = LineMode::WithoutNewline.into();
        assert!(!append);
    }
}
