use std::{
    collections::HashMap,
    fmt::{Debug, Display},
    hash::Hash,
};

/// The trait for vertex labels.
///
/// Vertices of the dependency graph may be labeled by any type implementing some traits allowing their use in maps and their display.
/// This trait is just a shortcut used to combine them.
///
/// Simple types like [usize] and [String] implements [LabelType].
pub trait LabelType: Clone + Debug + Display + Eq + Hash {}
impl<T: Clone + Debug + Display + Eq + Hash> LabelType for T {}

/// A label associated with a unique identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Label<T>
where
    T: LabelType,
{
    id: usize,
    label: T,
}

impl<T> Label<T>
where
    T: LabelType,
{
    pub(crate) fn new(id: usize, label: T) -> Self {
        Self { id, label }
    }

    /// Returns the label.
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the identifier associated with the label.
    pub fn id(&self) -> usize {
        self.id
    }
}

impl<T> Display for Label<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Handles a set of labels, each one with a unique id.
///
/// Identifiers are given in insertion order, starting at zero.
/// Labels are never removed, so an identifier always refers to the same label.
///
/// The type of the labels must be [`LabelType`] instances.
#[derive(Debug)]
pub struct LabelSet<T>
where
    T: LabelType,
{
    labels: Vec<Label<T>>,
    label_to_id: HashMap<T, usize>,
}

impl<T> Default for LabelSet<T>
where
    T: LabelType,
{
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            label_to_id: HashMap::new(),
        }
    }
}

impl<T> LabelSet<T>
where
    T: LabelType,
{
    /// Builds a new label set initialized with a set of labels.
    ///
    /// If a label appears multiple times, the first occurrence is the only one that is considered.
    /// Each label will be assigned an id equal to its index in the provided slice of labels (after the removal of the duplicates).
    ///
    /// # Example
    ///
    /// ```
    /// # use carneades::utils::LabelSet;
    /// let labels = vec!["a", "b", "a"];
    /// let labels = LabelSet::new_with_labels(&labels);
    /// assert_eq!(2, labels.len());
    /// assert_eq!(0, labels.get_label(&"a").unwrap().id());
    /// assert_eq!(1, labels.get_label(&"b").unwrap().id());
    /// ```
    pub fn new_with_labels(labels: &[T]) -> Self {
        let mut label_set = LabelSet {
            labels: Vec::with_capacity(labels.len()),
            label_to_id: HashMap::with_capacity(labels.len()),
        };
        labels.iter().for_each(|l| {
            label_set.new_label(l.clone());
        });
        label_set
    }

    /// Adds a new label to this set and returns its id.
    ///
    /// If the label is already present in the set, nothing is added and the id of the existing label is returned.
    ///
    /// ```
    /// # use carneades::utils::LabelSet;
    /// let mut label_set = LabelSet::new_with_labels(&["a", "b"]);
    /// assert_eq!(2, label_set.new_label("c"));
    /// assert_eq!(2, label_set.new_label("c"));
    /// assert_eq!(3, label_set.len());
    /// ```
    pub fn new_label(&mut self, label: T) -> usize {
        let labels = &mut self.labels;
        *self.label_to_id.entry(label.clone()).or_insert_with(|| {
            let id = labels.len();
            labels.push(Label::new(id, label));
            id
        })
    }

    /// Returns the number of labels in the set.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if and only if the set has no label.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns `true` if and only if the label belongs to this set.
    pub fn contains(&self, label: &T) -> bool {
        self.label_to_id.contains_key(label)
    }

    /// Returns the label object associated to a label, or `None` if the label is not in the set.
    ///
    /// # Example
    ///
    /// ```
    /// # use carneades::utils::LabelSet;
    /// let labels = LabelSet::new_with_labels(&["a", "b", "c"]);
    /// assert!(labels.get_label(&"a").is_some());
    /// assert!(labels.get_label(&"d").is_none());
    /// ```
    pub fn get_label(&self, label: &T) -> Option<&Label<T>> {
        self.label_to_id.get(label).map(|i| &self.labels[*i])
    }

    /// Returns the label with the corresponding id.
    ///
    /// # Panics
    ///
    /// Panics if no label has such id.
    pub fn get_label_by_id(&self, id: usize) -> &Label<T> {
        &self.labels[id]
    }

    /// Returns an iterator to the labels, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Label<T>> + '_ {
        self.labels.iter()
    }
}
