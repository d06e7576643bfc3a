use super::{Argument, CaesError, Proposition};
use crate::utils::{Label, LabelSet};
use anyhow::Result;
use log::debug;
use std::{collections::HashMap, collections::HashSet, fmt::Display};

/// The dependency graph of a set of arguments.
///
/// Vertices are either propositions or arguments.
/// For each registered argument, there is an edge from its conclusion to the argument,
/// and an edge from the argument to each of its premises and exceptions.
///
/// Both polarities of a conclusion are registered as propositions when an argument is added,
/// so the negation of a conclusion can always be queried.
///
/// The graph grows monotonically: there is no way to remove a proposition or an argument.
///
/// # Example
///
/// ```
/// # use carneades::caes::{Argument, ArgumentSet, Proposition};
/// let prop = |s: &str| s.parse::<Proposition>().unwrap();
/// let mut argset = ArgumentSet::default();
/// argset
///     .add_argument(Argument::new(prop("murder"), [prop("kill"), prop("intent")], []), Some("arg1"))
///     .unwrap();
/// assert_eq!(4, argset.n_propositions()); // murder, -murder, intent, kill
/// assert_eq!(1, argset.get_arguments(&prop("murder")).unwrap().len());
/// assert!(argset.get_arguments(&prop("-murder")).unwrap().is_empty());
/// assert!(argset.get_arguments(&prop("theft")).is_err());
/// ```
#[derive(Default)]
pub struct ArgumentSet {
    propositions: LabelSet<Proposition>,
    arguments: Vec<Argument>,
    id_to_argument: HashMap<String, usize>,
    supporting_arguments: Vec<Vec<usize>>,
    argument_targets: Vec<Vec<usize>>,
}

/// A vertex of the dependency graph of an [ArgumentSet].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Vertex<'a> {
    /// A proposition vertex.
    Proposition(&'a Label<Proposition>),
    /// An argument vertex.
    Argument(&'a Argument),
}

impl Vertex<'_> {
    /// Returns `true` iff this vertex stands for an argument.
    pub fn is_argument(&self) -> bool {
        matches!(self, Vertex::Argument(_))
    }
}

impl Display for Vertex<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Vertex::Proposition(p) => write!(f, "{}", p),
            Vertex::Argument(a) => write!(f, "{}", a.id().unwrap_or_default()),
        }
    }
}

/// An edge of the dependency graph of an [ArgumentSet].
///
/// Edges are built by [ArgumentSet] objects.
pub struct Edge<'a>(Vertex<'a>, Vertex<'a>);

impl<'a> Edge<'a> {
    /// Returns the source vertex.
    ///
    /// Example
    ///
    /// ```
    /// # use carneades::caes::Edge;
    /// fn describe_edge(edge: &Edge) {
    ///     println!("{} depends on {}", edge.source(), edge.target());
    /// }
    /// ```
    pub fn source(&self) -> Vertex<'a> {
        self.0
    }

    /// Returns the target vertex.
    pub fn target(&self) -> Vertex<'a> {
        self.1
    }
}

impl ArgumentSet {
    /// Adds a proposition to the graph if it is not already present, and returns its vertex.
    pub fn add_proposition(&mut self, proposition: Proposition) -> &Label<Proposition> {
        let id = self.add_proposition_id(proposition);
        self.propositions.get_label_by_id(id)
    }

    fn add_proposition_id(&mut self, proposition: Proposition) -> usize {
        let old_len = self.propositions.len();
        let id = self.propositions.new_label(proposition);
        if self.propositions.len() > old_len {
            self.supporting_arguments.push(Vec::new());
            debug!(
                "added proposition '{}' to graph",
                self.propositions.get_label_by_id(id)
            );
        }
        id
    }

    /// Registers an argument in this set.
    ///
    /// The argument gets the provided identifier, or `argN` if no identifier is given,
    /// `N` being the number of arguments registered so far plus one.
    /// Its conclusion, the negation of its conclusion, its premises and its exceptions are added to the graph.
    ///
    /// An error is returned if an argument with the same identifier is already registered.
    pub fn add_argument(&mut self, mut argument: Argument, arg_id: Option<&str>) -> Result<&Argument> {
        let arg_id = arg_id
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("arg{}", 1 + self.arguments.len()));
        if self.id_to_argument.contains_key(&arg_id) {
            return Err(CaesError::Validation(format!(
                "argument identifier '{}' is already registered",
                arg_id
            ))
            .into());
        }
        argument.set_id(arg_id.clone());
        let conclusion_id = self.add_proposition_id(argument.conclusion().clone());
        self.add_proposition_id(argument.conclusion().negate());
        let targets = argument
            .premises()
            .chain(argument.exceptions())
            .map(|p| self.add_proposition_id(p.clone()))
            .collect::<Vec<usize>>();
        let index = self.arguments.len();
        self.supporting_arguments[conclusion_id].push(index);
        self.argument_targets.push(targets);
        self.id_to_argument.insert(arg_id, index);
        debug!("added argument '{}' to graph: {}", argument.id().unwrap_or_default(), argument);
        self.arguments.push(argument);
        Ok(&self.arguments[index])
    }

    /// Returns the arguments supporting a proposition, in registration order.
    ///
    /// An error is returned if the proposition has never been added to the graph.
    /// If it has, but no argument supports it, an empty vector is returned.
    pub fn get_arguments(&self, proposition: &Proposition) -> Result<Vec<&Argument>> {
        match self.propositions.get_label(proposition) {
            Some(label) => Ok(self.supporting_arguments[label.id()]
                .iter()
                .map(|i| &self.arguments[*i])
                .collect()),
            None => Err(CaesError::NotFound(proposition.to_string()).into()),
        }
    }

    /// Returns the argument registered with the given identifier, if any.
    pub fn get_argument(&self, arg_id: &str) -> Option<&Argument> {
        self.id_to_argument.get(arg_id).map(|i| &self.arguments[*i])
    }

    /// Returns `true` iff the proposition is a vertex of the graph.
    pub fn contains_proposition(&self, proposition: &Proposition) -> bool {
        self.propositions.contains(proposition)
    }

    /// Returns the set of propositions represented in the graph.
    pub fn propset(&self) -> HashSet<&Proposition> {
        self.iter_propositions().collect()
    }

    /// Returns an iterator to the propositions of the graph, in insertion order.
    pub fn iter_propositions(&self) -> impl Iterator<Item = &Proposition> + '_ {
        self.propositions.iter().map(|l| l.label())
    }

    /// Returns the number of propositions in the graph.
    pub fn n_propositions(&self) -> usize {
        self.propositions.len()
    }

    /// Returns an iterator to the registered arguments, in registration order.
    pub fn iter_arguments(&self) -> impl Iterator<Item = &Argument> + '_ {
        self.arguments.iter()
    }

    /// Returns the number of registered arguments.
    pub fn n_arguments(&self) -> usize {
        self.arguments.len()
    }

    /// Returns an iterator to the vertices of the graph: propositions first, then arguments.
    pub fn iter_vertices(&self) -> impl Iterator<Item = Vertex<'_>> + '_ {
        self.propositions
            .iter()
            .map(Vertex::Proposition)
            .chain(self.arguments.iter().map(Vertex::Argument))
    }

    /// Returns an iterator to the edges of the graph.
    ///
    /// Edges from conclusions to arguments come first, then edges from arguments to their premises and exceptions.
    pub fn iter_edges(&self) -> impl Iterator<Item = Edge<'_>> + '_ {
        let to_arguments = self.propositions.iter().flat_map(move |p| {
            self.supporting_arguments[p.id()]
                .iter()
                .map(move |a| Edge(Vertex::Proposition(p), Vertex::Argument(&self.arguments[*a])))
        });
        let from_arguments = self.arguments.iter().enumerate().flat_map(move |(i, a)| {
            self.argument_targets[i].iter().map(move |p| {
                Edge(
                    Vertex::Argument(a),
                    Vertex::Proposition(self.propositions.get_label_by_id(*p)),
                )
            })
        });
        to_arguments.chain(from_arguments)
    }

    /// Returns the number of edges in the graph.
    pub fn n_edges(&self) -> usize {
        self.supporting_arguments
            .iter()
            .chain(self.argument_targets.iter())
            .map(|v| v.len())
            .sum()
    }
}
