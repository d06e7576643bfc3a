use super::{
    Argument, ArgumentSet, Audience, CaesError, EvaluationCall, EvaluationObserver, NoopObserver,
    ProofStandard, ProofStandardKind, Proposition, Thresholds,
};
use anyhow::Result;
use log::debug;
use std::collections::{HashMap, HashSet};

/// A Carneades Argument Evaluation Structure.
///
/// A CAES is made of a set of arguments, an audience and the proof standards of the propositions.
/// It determines whether propositions are *acceptable*, that is whether they meet their proof standards,
/// and whether arguments are *applicable*, that is whether their premises hold and their exceptions do not.
///
/// Applicability and acceptability are mutually recursive.
/// Each query tracks the propositions under evaluation; if the acceptability of a proposition depends on itself,
/// the query fails with [CaesError::CycleDetected].
///
/// # Example
///
/// ```
/// # use carneades::caes::{Argument, ArgumentSet, Audience, Caes, ProofStandard, Proposition};
/// let prop = |s: &str| s.parse::<Proposition>().unwrap();
/// let mut argset = ArgumentSet::default();
/// argset.add_argument(Argument::new(prop("murder"), [prop("kill"), prop("intent")], []), None).unwrap();
/// argset.add_argument(Argument::new(prop("intent"), [prop("witness1")], [prop("unreliable1")]), None).unwrap();
/// argset.add_argument(Argument::new(prop("-intent"), [prop("witness2")], [prop("unreliable2")]), None).unwrap();
/// let audience = Audience::new(
///     [prop("kill"), prop("witness1"), prop("witness2"), prop("unreliable2")],
///     [("arg1", 0.8), ("arg2", 0.3), ("arg3", 0.8)],
/// ).unwrap();
/// let ps = ProofStandard::new(&[(prop("intent"), "beyond_reasonable_doubt")], "scintilla").unwrap();
/// let caes = Caes::new(&argset, &audience, &ps);
/// assert!(caes.applicable(argset.get_argument("arg2").unwrap()).unwrap());
/// assert!(!caes.acceptable(&prop("intent")).unwrap());
/// assert!(!caes.acceptable(&prop("murder")).unwrap());
/// ```
pub struct Caes<'a> {
    argset: &'a ArgumentSet,
    audience: &'a Audience,
    proof_standard: &'a ProofStandard,
    thresholds: Thresholds,
    observer: Box<dyn EvaluationObserver + 'a>,
}

#[derive(Default)]
struct EvaluationContext {
    in_progress: HashSet<Proposition>,
    decided: HashMap<Proposition, bool>,
    depth: usize,
}

impl<'a> Caes<'a> {
    /// Builds a new CAES with the default thresholds.
    pub fn new(
        argset: &'a ArgumentSet,
        audience: &'a Audience,
        proof_standard: &'a ProofStandard,
    ) -> Self {
        Self::new_with_thresholds(argset, audience, proof_standard, Thresholds::default())
    }

    /// Builds a new CAES with the provided thresholds.
    pub fn new_with_thresholds(
        argset: &'a ArgumentSet,
        audience: &'a Audience,
        proof_standard: &'a ProofStandard,
        thresholds: Thresholds,
    ) -> Self {
        Caes {
            argset,
            audience,
            proof_standard,
            thresholds,
            observer: Box::<NoopObserver>::default(),
        }
    }

    /// Replaces the observer notified of the recursive calls.
    pub fn set_observer(&mut self, observer: Box<dyn EvaluationObserver + 'a>) {
        self.observer = observer;
    }

    /// Returns the thresholds of this CAES.
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Returns an iterator to all the arguments of the CAES, in registration order.
    pub fn get_all_arguments(&self) -> impl Iterator<Item = &'a Argument> + 'a {
        self.argset.iter_arguments()
    }

    /// Checks whether an argument is applicable.
    ///
    /// An argument is applicable iff each of its premises is an assumption or is acceptable while its negation is not assumed,
    /// and none of its exceptions is an assumption or is acceptable while its negation is not assumed.
    /// An argument with neither premises nor exceptions is always applicable.
    pub fn applicable(&self, argument: &Argument) -> Result<bool> {
        self.applicable_in(argument, &mut EvaluationContext::default())
    }

    /// Checks whether a proposition is acceptable, that is if it meets its proof standard.
    pub fn acceptable(&self, proposition: &Proposition) -> Result<bool> {
        self.acceptable_in(proposition, &mut EvaluationContext::default())
    }

    /// Checks whether a proposition meets a given proof standard.
    pub fn meets_proof_standard(
        &self,
        proposition: &Proposition,
        standard: ProofStandardKind,
    ) -> Result<bool> {
        self.meets_proof_standard_in(proposition, standard, &mut EvaluationContext::default())
    }

    /// Returns the weight the audience gives to an argument.
    ///
    /// An error is returned if the audience gives no weight to it.
    pub fn weight_of(&self, argument: &Argument) -> Result<f64> {
        let arg_id = match argument.id() {
            Some(id) => id,
            None => return Err(CaesError::MissingWeight(argument.to_string()).into()),
        };
        match self.audience.weight(arg_id) {
            Some(w) => Ok(w),
            None => Err(CaesError::MissingWeight(arg_id.to_string()).into()),
        }
    }

    /// Returns the weight of the strongest applicable argument among the provided ones.
    ///
    /// If none of them is applicable, `0.0` is returned.
    pub fn max_weight_applicable(&self, arguments: &[&Argument]) -> Result<f64> {
        self.max_weight_applicable_in(arguments, &mut EvaluationContext::default())
    }

    /// Returns the weight of the strongest applicable argument supporting the proposition.
    pub fn max_weight_pro(&self, proposition: &Proposition) -> Result<f64> {
        self.max_weight_pro_in(proposition, &mut EvaluationContext::default())
    }

    /// Returns the weight of the strongest applicable argument supporting the negation of the proposition.
    pub fn max_weight_con(&self, proposition: &Proposition) -> Result<f64> {
        self.max_weight_con_in(proposition, &mut EvaluationContext::default())
    }

    fn observed<F>(
        &self,
        call: &EvaluationCall,
        ctx: &mut EvaluationContext,
        eval: F,
    ) -> Result<bool>
    where
        F: FnOnce(&mut EvaluationContext) -> Result<bool>,
    {
        self.observer.on_enter(call, ctx.depth);
        ctx.depth += 1;
        let result = eval(ctx);
        ctx.depth -= 1;
        self.observer
            .on_exit(call, result.as_ref().ok().copied(), ctx.depth);
        result
    }

    fn applicable_in(&self, argument: &Argument, ctx: &mut EvaluationContext) -> Result<bool> {
        self.observed(&EvaluationCall::Applicable(argument), ctx, |ctx| {
            debug!(
                "checking applicability of {}",
                argument.id().unwrap_or_default()
            );
            for p in argument.premises() {
                let holds = self.audience.is_assumed(p)
                    || (!self.audience.is_assumed(&p.negate()) && self.acceptable_in(p, ctx)?);
                if !holds {
                    return Ok(false);
                }
            }
            for e in argument.exceptions() {
                let discarded = !self.audience.is_assumed(e)
                    && (self.audience.is_assumed(&e.negate()) || !self.acceptable_in(e, ctx)?);
                if !discarded {
                    return Ok(false);
                }
            }
            Ok(true)
        })
    }

    fn acceptable_in(&self, proposition: &Proposition, ctx: &mut EvaluationContext) -> Result<bool> {
        if let Some(r) = ctx.decided.get(proposition) {
            return Ok(*r);
        }
        if !ctx.in_progress.insert(proposition.clone()) {
            return Err(CaesError::CycleDetected(proposition.to_string()).into());
        }
        let result = self.observed(&EvaluationCall::Acceptable(proposition), ctx, |ctx| {
            let standard = self.proof_standard.get_proofstandard(proposition);
            debug!(
                "checking whether proposition '{}' meets proof standard '{}'",
                proposition, standard
            );
            self.meets_proof_standard_in(proposition, standard, ctx)
        });
        ctx.in_progress.remove(proposition);
        let r = result?;
        ctx.decided.insert(proposition.clone(), r);
        Ok(r)
    }

    fn meets_proof_standard_in(
        &self,
        proposition: &Proposition,
        standard: ProofStandardKind,
        ctx: &mut EvaluationContext,
    ) -> Result<bool> {
        let call = EvaluationCall::MeetsProofStandard(proposition, standard);
        self.observed(&call, ctx, |ctx| match standard {
            ProofStandardKind::Scintilla => self.any_applicable(proposition, ctx),
            ProofStandardKind::Preponderance => {
                let mwp = self.max_weight_pro_in(proposition, ctx)?;
                let mwc = self.max_weight_con_in(proposition, ctx)?;
                Ok(mwp > mwc)
            }
            ProofStandardKind::ClearAndConvincing => {
                let mwp = self.max_weight_pro_in(proposition, ctx)?;
                let mwc = self.max_weight_con_in(proposition, ctx)?;
                let exceeds_alpha = mwp > self.thresholds.alpha();
                let diff_exceeds_gamma = mwp - mwc > self.thresholds.gamma();
                debug!("max weight pro '{}' is {}", proposition, mwp);
                debug!("max weight con '{}' is {}", proposition, mwc);
                debug!(
                    "max weight pro {} > alpha {}: {}",
                    mwp,
                    self.thresholds.alpha(),
                    exceeds_alpha
                );
                debug!(
                    "diff between pro and con = {} > gamma: {}",
                    mwp - mwc,
                    diff_exceeds_gamma
                );
                Ok(exceeds_alpha && diff_exceeds_gamma)
            }
            ProofStandardKind::BeyondReasonableDoubt => Ok(self.meets_proof_standard_in(
                proposition,
                ProofStandardKind::ClearAndConvincing,
                ctx,
            )? && self.max_weight_con_in(proposition, ctx)?
                < self.thresholds.gamma()),
            ProofStandardKind::DialecticalValidity => Ok(self.any_applicable(proposition, ctx)?
                && !self.any_applicable(&proposition.negate(), ctx)?),
        })
    }

    fn any_applicable(&self, proposition: &Proposition, ctx: &mut EvaluationContext) -> Result<bool> {
        for argument in self.argset.get_arguments(proposition)? {
            if self.applicable_in(argument, ctx)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn max_weight_applicable_in(
        &self,
        arguments: &[&Argument],
        ctx: &mut EvaluationContext,
    ) -> Result<f64> {
        let mut applicable_args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            if self.applicable_in(argument, ctx)? {
                applicable_args.push(*argument);
            }
        }
        if applicable_args.is_empty() {
            debug!("no applicable arguments in {:?}", argument_ids(arguments));
            return Ok(0.0);
        }
        let weights = applicable_args
            .iter()
            .map(|a| self.weight_of(a))
            .collect::<Result<Vec<f64>>>()?;
        debug!(
            "weights of {:?} are {:?}",
            argument_ids(&applicable_args),
            weights
        );
        Ok(weights.into_iter().fold(0.0, f64::max))
    }

    fn max_weight_pro_in(&self, proposition: &Proposition, ctx: &mut EvaluationContext) -> Result<f64> {
        let arguments = self.argset.get_arguments(proposition)?;
        self.max_weight_applicable_in(&arguments, ctx)
    }

    fn max_weight_con_in(&self, proposition: &Proposition, ctx: &mut EvaluationContext) -> Result<f64> {
        let arguments = self.argset.get_arguments(&proposition.negate())?;
        self.max_weight_applicable_in(&arguments, ctx)
    }
}

fn argument_ids<'b>(arguments: &[&'b Argument]) -> Vec<&'b str> {
    arguments
        .iter()
        .map(|a| a.id().unwrap_or_default())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    fn prop(s: &str) -> Proposition {
        s.parse().unwrap()
    }

    struct MurderCase {
        argset: ArgumentSet,
        audience: Audience,
        ps: ProofStandard,
    }

    impl MurderCase {
        fn new() -> Self {
            let mut argset = ArgumentSet::default();
            argset
                .add_argument(
                    Argument::new(prop("murder"), [prop("kill"), prop("intent")], []),
                    Some("arg1"),
                )
                .unwrap();
            argset
                .add_argument(
                    Argument::new(prop("intent"), [prop("witness1")], [prop("unreliable1")]),
                    Some("arg2"),
                )
                .unwrap();
            argset
                .add_argument(
                    Argument::new(prop("-intent"), [prop("witness2")], [prop("unreliable2")]),
                    Some("arg3"),
                )
                .unwrap();
            let audience = Audience::new(
                [
                    prop("kill"),
                    prop("witness1"),
                    prop("witness2"),
                    prop("unreliable2"),
                ],
                [("arg1", 0.8), ("arg2", 0.3), ("arg3", 0.8)],
            )
            .unwrap();
            let ps = ProofStandard::new(&[(prop("intent"), "beyond_reasonable_doubt")], "scintilla")
                .unwrap();
            MurderCase {
                argset,
                audience,
                ps,
            }
        }

        fn caes(&self) -> Caes<'_> {
            Caes::new(&self.argset, &self.audience, &self.ps)
        }

        fn arg(&self, id: &str) -> &Argument {
            self.argset.get_argument(id).unwrap()
        }
    }

    #[test]
    fn test_murder_applicability() {
        let case = MurderCase::new();
        let caes = case.caes();
        assert!(caes.applicable(case.arg("arg2")).unwrap());
        assert!(!caes.applicable(case.arg("arg3")).unwrap());
        assert!(!caes.applicable(case.arg("arg1")).unwrap());
    }

    #[test]
    fn test_murder_acceptability() {
        let case = MurderCase::new();
        let caes = case.caes();
        assert!(!caes.acceptable(&prop("intent")).unwrap());
        assert!(!caes.acceptable(&prop("-intent")).unwrap());
        assert!(!caes.acceptable(&prop("murder")).unwrap());
        assert!(!caes.acceptable(&prop("-murder")).unwrap());
    }

    #[test]
    fn test_murder_weights() {
        let case = MurderCase::new();
        let caes = case.caes();
        assert_eq!(0.3, caes.max_weight_pro(&prop("intent")).unwrap());
        assert_eq!(0.0, caes.max_weight_con(&prop("intent")).unwrap());
        assert_eq!(0.8, caes.weight_of(case.arg("arg1")).unwrap());
        assert!(caes.meets_proof_standard(&prop("intent"), ProofStandardKind::Scintilla).unwrap());
        assert!(caes.meets_proof_standard(&prop("intent"), ProofStandardKind::Preponderance).unwrap());
        assert!(!caes
            .meets_proof_standard(&prop("intent"), ProofStandardKind::ClearAndConvincing)
            .unwrap());
    }

    #[test]
    fn test_lower_alpha_makes_intent_acceptable() {
        let case = MurderCase::new();
        let caes = Caes::new_with_thresholds(
            &case.argset,
            &case.audience,
            &case.ps,
            Thresholds::new(0.25, 0.3, 0.2).unwrap(),
        );
        assert!(caes.acceptable(&prop("intent")).unwrap());
        assert!(caes.acceptable(&prop("murder")).unwrap());
        assert!(!caes.acceptable(&prop("-murder")).unwrap());
    }

    #[test]
    fn test_get_all_arguments() {
        let case = MurderCase::new();
        let rendered = case
            .caes()
            .get_all_arguments()
            .map(|a| a.to_string())
            .collect::<Vec<String>>();
        assert_eq!(
            vec![
                "[intent, kill], ~[] => murder",
                "[witness1], ~[unreliable1] => intent",
                "[witness2], ~[unreliable2] => -intent",
            ],
            rendered
        );
    }

    #[test]
    fn test_max_weight_applicable_empty() {
        let case = MurderCase::new();
        let caes = case.caes();
        assert_eq!(0.0, caes.max_weight_applicable(&[]).unwrap());
        assert_eq!(
            0.0,
            caes.max_weight_applicable(&[case.arg("arg1"), case.arg("arg3")])
                .unwrap()
        );
        assert_eq!(
            0.3,
            caes.max_weight_applicable(&[case.arg("arg3"), case.arg("arg2")])
                .unwrap()
        );
    }

    #[test]
    fn test_vacuous_applicability() {
        let argset = ArgumentSet::default();
        let ps = ProofStandard::default();
        let arg = Argument::new(prop("c"), [], []);
        for assumptions in [vec![], vec![prop("a")], vec![prop("-c")]] {
            let audience = Audience::new(assumptions, [] as [(&str, f64); 0]).unwrap();
            let caes = Caes::new(&argset, &audience, &ps);
            assert!(caes.applicable(&arg).unwrap());
        }
    }

    #[test]
    fn test_premise_contradicted_by_assumption() {
        let mut argset = ArgumentSet::default();
        let arg = argset
            .add_argument(Argument::new(prop("c"), [prop("a"), prop("b")], []), None)
            .unwrap()
            .clone();
        let ps = ProofStandard::default();
        let audience = Audience::new([prop("a"), prop("-b")], [] as [(&str, f64); 0]).unwrap();
        let caes = Caes::new(&argset, &audience, &ps);
        assert!(!caes.applicable(&arg).unwrap());
        let audience = Audience::new([prop("a"), prop("b")], [] as [(&str, f64); 0]).unwrap();
        let caes = Caes::new(&argset, &audience, &ps);
        assert!(caes.applicable(&arg).unwrap());
    }

    #[test]
    fn test_exception_negated_by_assumption() {
        let mut argset = ArgumentSet::default();
        argset
            .add_argument(Argument::new(prop("e"), [], []), Some("for_e"))
            .unwrap();
        let arg = argset
            .add_argument(Argument::new(prop("c"), [], [prop("e")]), Some("for_c"))
            .unwrap()
            .clone();
        let ps = ProofStandard::default();
        let audience = Audience::new([], [] as [(&str, f64); 0]).unwrap();
        let caes = Caes::new(&argset, &audience, &ps);
        assert!(!caes.applicable(&arg).unwrap());
        let audience = Audience::new([prop("-e")], [] as [(&str, f64); 0]).unwrap();
        let caes = Caes::new(&argset, &audience, &ps);
        assert!(caes.applicable(&arg).unwrap());
    }

    #[test]
    fn test_missing_weight() {
        let mut argset = ArgumentSet::default();
        argset
            .add_argument(Argument::new(prop("a"), [], []), Some("unweighted"))
            .unwrap();
        let ps = ProofStandard::with_default(ProofStandardKind::Preponderance);
        let audience = Audience::default();
        let caes = Caes::new(&argset, &audience, &ps);
        let err = caes.acceptable(&prop("a")).unwrap_err();
        assert_eq!(
            Some(&CaesError::MissingWeight("unweighted".to_string())),
            err.downcast_ref::<CaesError>()
        );
    }

    #[test]
    fn test_unknown_proposition() {
        let case = MurderCase::new();
        let err = case.caes().acceptable(&prop("theft")).unwrap_err();
        assert_eq!(
            Some(&CaesError::NotFound("theft".to_string())),
            err.downcast_ref::<CaesError>()
        );
    }

    fn weighted_case(pro: &[f64], con: &[f64]) -> (ArgumentSet, Audience) {
        let mut argset = ArgumentSet::default();
        argset.add_proposition(prop("p"));
        argset.add_proposition(prop("-p"));
        let mut weights = vec![];
        for (i, w) in pro.iter().enumerate() {
            let id = format!("pro{}", i);
            argset
                .add_argument(Argument::new(prop("p"), [], []), Some(id.as_str()))
                .unwrap();
            weights.push((id, *w));
        }
        for (i, w) in con.iter().enumerate() {
            let id = format!("con{}", i);
            argset
                .add_argument(Argument::new(prop("-p"), [], []), Some(id.as_str()))
                .unwrap();
            weights.push((id, *w));
        }
        (argset, Audience::new([], weights).unwrap())
    }

    fn meets(pro: &[f64], con: &[f64], standard: ProofStandardKind) -> bool {
        let (argset, audience) = weighted_case(pro, con);
        let ps = ProofStandard::default();
        let met = Caes::new(&argset, &audience, &ps)
            .meets_proof_standard(&prop("p"), standard)
            .unwrap();
        met
    }

    #[test]
    fn test_preponderance() {
        assert!(meets(&[0.5, 0.3], &[0.4], ProofStandardKind::Preponderance));
        assert!(!meets(&[0.4], &[0.4], ProofStandardKind::Preponderance));
        assert!(!meets(&[], &[], ProofStandardKind::Preponderance));
    }

    #[test]
    fn test_clear_and_convincing() {
        assert!(meets(&[0.7], &[0.3], ProofStandardKind::ClearAndConvincing));
        assert!(!meets(&[0.7], &[0.6], ProofStandardKind::ClearAndConvincing));
        assert!(!meets(&[0.35], &[], ProofStandardKind::ClearAndConvincing));
    }

    #[test]
    fn test_beyond_reasonable_doubt() {
        assert!(meets(&[0.7], &[0.1], ProofStandardKind::BeyondReasonableDoubt));
        assert!(!meets(&[0.9], &[0.3], ProofStandardKind::BeyondReasonableDoubt));
        assert!(meets(&[0.9], &[0.3], ProofStandardKind::ClearAndConvincing));
    }

    #[test]
    fn test_dialectical_validity() {
        assert!(meets(&[0.1], &[], ProofStandardKind::DialecticalValidity));
        assert!(!meets(&[0.9], &[0.1], ProofStandardKind::DialecticalValidity));
        assert!(!meets(&[], &[], ProofStandardKind::DialecticalValidity));
    }

    #[test]
    fn test_standard_ordering() {
        let cases: [(&[f64], &[f64]); 6] = [
            (&[0.7], &[0.1]),
            (&[0.9], &[0.3]),
            (&[0.5], &[0.0]),
            (&[0.3], &[]),
            (&[0.45], &[0.1]),
            (&[], &[0.6]),
        ];
        for (pro, con) in cases {
            if meets(pro, con, ProofStandardKind::BeyondReasonableDoubt) {
                assert!(meets(pro, con, ProofStandardKind::ClearAndConvincing));
            }
            if meets(pro, con, ProofStandardKind::ClearAndConvincing) {
                let max_pro = pro.iter().copied().fold(0.0, f64::max);
                assert!(max_pro > 0.4);
            }
        }
    }

    #[test]
    fn test_direct_cycle() {
        let mut argset = ArgumentSet::default();
        argset
            .add_argument(Argument::new(prop("p"), [prop("p")], []), None)
            .unwrap();
        let ps = ProofStandard::default();
        let audience = Audience::default();
        let caes = Caes::new(&argset, &audience, &ps);
        let err = caes.acceptable(&prop("p")).unwrap_err();
        assert_eq!(
            Some(&CaesError::CycleDetected("p".to_string())),
            err.downcast_ref::<CaesError>()
        );
    }

    #[test]
    fn test_indirect_cycle_through_exception() {
        let mut argset = ArgumentSet::default();
        argset
            .add_argument(Argument::new(prop("p"), [prop("q")], []), None)
            .unwrap();
        argset
            .add_argument(Argument::new(prop("q"), [], [prop("p")]), None)
            .unwrap();
        let ps = ProofStandard::default();
        let audience = Audience::default();
        let caes = Caes::new(&argset, &audience, &ps);
        assert!(caes.acceptable(&prop("q")).is_err());
        assert!(caes.acceptable(&prop("p")).is_err());
    }

    #[test]
    fn test_cycle_broken_by_assumption() {
        let mut argset = ArgumentSet::default();
        argset
            .add_argument(Argument::new(prop("p"), [prop("p")], []), None)
            .unwrap();
        let ps = ProofStandard::default();
        let audience = Audience::new([prop("p")], [] as [(&str, f64); 0]).unwrap();
        let caes = Caes::new(&argset, &audience, &ps);
        assert!(caes.acceptable(&prop("p")).unwrap());
    }

    #[test]
    fn test_shared_premise_is_not_a_cycle() {
        let mut argset = ArgumentSet::default();
        argset
            .add_argument(Argument::new(prop("a"), [prop("b"), prop("c")], []), None)
            .unwrap();
        argset
            .add_argument(Argument::new(prop("b"), [prop("d")], []), None)
            .unwrap();
        argset
            .add_argument(Argument::new(prop("c"), [prop("d")], []), None)
            .unwrap();
        argset
            .add_argument(Argument::new(prop("d"), [], []), None)
            .unwrap();
        let ps = ProofStandard::default();
        let audience = Audience::default();
        let caes = Caes::new(&argset, &audience, &ps);
        assert!(caes.acceptable(&prop("a")).unwrap());
    }

    struct RecordingObserver(Rc<RefCell<Vec<String>>>);

    impl EvaluationObserver for RecordingObserver {
        fn on_enter(&self, call: &EvaluationCall, depth: usize) {
            self.0.borrow_mut().push(format!("{}> {}", depth, call));
        }

        fn on_exit(&self, call: &EvaluationCall, result: Option<bool>, depth: usize) {
            self.0
                .borrow_mut()
                .push(format!("{}< {} {:?}", depth, call, result));
        }
    }

    #[test]
    fn test_observer() {
        let case = MurderCase::new();
        let mut caes = case.caes();
        let calls = Rc::new(RefCell::new(vec![]));
        caes.set_observer(Box::new(RecordingObserver(Rc::clone(&calls))));
        assert!(caes.applicable(case.arg("arg2")).unwrap());
        assert_eq!(
            vec![
                "0> applicable(arg2)",
                "1> acceptable(unreliable1)",
                "2> meets_proof_standard(unreliable1, scintilla)",
                "2< meets_proof_standard(unreliable1, scintilla) Some(false)",
                "1< acceptable(unreliable1) Some(false)",
                "0< applicable(arg2) Some(true)",
            ],
            *calls.borrow()
        );
    }
}
