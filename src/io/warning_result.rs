/// A value read from an instance, possibly along with warnings.
///
/// Unlike a `Result`, there is always a value; warnings are handed to a callback when the value is consumed.
pub(crate) enum WarningResult<T> {
    Ok(T),
    Warned(T, Vec<String>),
}

impl<T> WarningResult<T> {
    /// Returns the value, passing the warnings (if any) to the callback.
    pub(crate) fn consume_warnings<F>(self, f: F) -> T
    where
        F: FnOnce(Vec<String>),
    {
        match self {
            WarningResult::Ok(t) => t,
            WarningResult::Warned(t, w) => {
                f(w);
                t
            }
        }
    }

    /// Adds a warning to this result.
    pub(crate) fn warn(self, warning: String) -> Self {
        match self {
            WarningResult::Ok(t) => WarningResult::Warned(t, vec![warning]),
            WarningResult::Warned(t, mut w) => {
                w.push(warning);
                WarningResult::Warned(t, w)
            }
        }
    }

    /// Maps the value of this result, keeping its warnings.
    pub(crate) fn map<U, F>(self, f: F) -> WarningResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            WarningResult::Ok(t) => WarningResult::Ok(f(t)),
            WarningResult::Warned(t, w) => WarningResult::Warned(f(t), w),
        }
    }

    /// Pairs the values of two results, concatenating their warnings.
    pub(crate) fn zip<U>(self, other: WarningResult<U>) -> WarningResult<(T, U)> {
        let (t, mut w1) = self.split();
        let (u, w2) = other.split();
        w1.extend(w2);
        WarningResult::from_parts((t, u), w1)
    }

    fn split(self) -> (T, Vec<String>) {
        match self {
            WarningResult::Ok(t) => (t, vec![]),
            WarningResult::Warned(t, w) => (t, w),
        }
    }

    fn from_parts(t: T, warnings: Vec<String>) -> Self {
        if warnings.is_empty() {
            WarningResult::Ok(t)
        } else {
            WarningResult::Warned(t, warnings)
        }
    }
}

impl<T> FromIterator<WarningResult<T>> for WarningResult<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = WarningResult<T>>>(iter: I) -> Self {
        let mut values = vec![];
        let mut warnings = vec![];
        for r in iter {
            let (t, w) = r.split();
            values.push(t);
            warnings.extend(w);
        }
        WarningResult::from_parts(values, warnings)
    }
}
