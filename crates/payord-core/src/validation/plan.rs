/// Schema definition, rule wiring and the validation runner.
///
/// A [`Schema`] is the definition of one record shape: the set of fields it
/// declares and the [`RulePlan`] wired for those fields.  It is produced by
/// [`SchemaBuilder::build`], which rejects inconsistent definitions with a
/// [`SchemaError`] before any record is seen.
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::normalize::normalize;
use crate::value::{Field, PaymentRecord, Value};
use crate::violation::{SchemaError, ValidationError, Violation, ViolationKind};

use super::{RuleId, ValidationRule, builtin_rules};

// ---------------------------------------------------------------------------
// ExtensionRule
// ---------------------------------------------------------------------------

type ExtensionCheck = dyn Fn(&PaymentRecord) -> Result<(), Vec<Violation>> + Send + Sync;

/// A caller-defined rule backed by a closure.
///
/// The closure sees the normalized record and returns the violations it
/// found.  Extension rules run before the built-in rules and cannot rewrite
/// field values.
pub struct ExtensionRule {
    code: String,
    fields: Vec<Field>,
    check: Box<ExtensionCheck>,
}

impl ExtensionRule {
    /// Creates an extension rule identified by `code` that reads `fields`.
    pub fn new<F>(code: impl Into<String>, fields: impl IntoIterator<Item = Field>, check: F) -> Self
    where
        F: Fn(&PaymentRecord) -> Result<(), Vec<Violation>> + Send + Sync + 'static,
    {
        Self {
            code: code.into(),
            fields: fields.into_iter().collect(),
            check: Box::new(check),
        }
    }
}

impl fmt::Debug for ExtensionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionRule")
            .field("code", &self.code)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

impl ValidationRule for ExtensionRule {
    fn id(&self) -> RuleId {
        RuleId::Extension(self.code.clone())
    }

    fn fields(&self) -> &[Field] {
        &self.fields
    }

    fn check(&self, record: &mut PaymentRecord, violations: &mut Vec<Violation>) {
        if let Err(found) = (self.check)(record) {
            violations.extend(found);
        }
    }
}

// ---------------------------------------------------------------------------
// RulePlan
// ---------------------------------------------------------------------------

/// Immutable, ordered list of rules wired into a schema.
///
/// Order: extension rules in declaration order, then the built-in rules
/// whose fields are all declared, in registry order, minus exclusions.
/// Cloning shares the underlying list.
#[derive(Clone)]
pub struct RulePlan {
    rules: Arc<[Box<dyn ValidationRule>]>,
}

impl RulePlan {
    /// Iterates over the rules in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn ValidationRule + 'static)> {
        self.rules.iter().map(AsRef::as_ref)
    }

    /// Rule identifiers in execution order.
    pub fn ids(&self) -> Vec<RuleId> {
        self.iter().map(ValidationRule::id).collect()
    }

    /// Returns `true` if a rule with `id` is wired.
    pub fn contains(&self, id: &RuleId) -> bool {
        self.iter().any(|rule| &rule.id() == id)
    }

    /// Number of wired rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rule is wired.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for RulePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(ValidationRule::id))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// SchemaBuilder
// ---------------------------------------------------------------------------

/// Declares a record shape and the rules wired into it.
///
/// # Examples
///
/// ```
/// use payord_core::validation::{RuleId, SchemaBuilder};
/// use payord_core::value::Field;
///
/// let schema = SchemaBuilder::new("transfer")
///     .fields([Field::PaymentType, Field::PayeeInn, Field::PayeeKpp])
///     .build()
///     .expect("valid schema");
/// assert_eq!(schema.plan().ids(), vec![RuleId::PayeeInn, RuleId::PayeeKpp]);
/// ```
pub struct SchemaBuilder {
    name: String,
    fields: Vec<Field>,
    extras: Vec<Box<dyn ValidationRule>>,
    excluded: Vec<String>,
    auto_rules: bool,
}

impl SchemaBuilder {
    /// Starts a schema named `name` with no fields and auto-wiring enabled.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            extras: Vec::new(),
            excluded: Vec::new(),
            auto_rules: true,
        }
    }

    /// Declares one field.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Declares several fields.
    #[must_use]
    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Adds an extra rule, run before the auto-wired built-ins.
    #[must_use]
    pub fn rule(mut self, rule: impl ValidationRule + 'static) -> Self {
        self.extras.push(Box::new(rule));
        self
    }

    /// Keeps the built-in rule with `code` out of the plan.
    #[must_use]
    pub fn exclude(mut self, code: impl Into<String>) -> Self {
        self.excluded.push(code.into());
        self
    }

    /// Enables or disables automatic wiring of built-in rules.
    #[must_use]
    pub fn auto_rules(mut self, enabled: bool) -> Self {
        self.auto_rules = enabled;
        self
    }

    /// Validates the definition and computes the rule plan.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::DuplicateField`] if a field is declared twice.
    /// - [`SchemaError::UndeclaredField`] if an extra rule reads a field the
    ///   schema does not declare.
    /// - [`SchemaError::UnknownExclusion`] if an exclusion names no built-in
    ///   rule.
    /// - [`SchemaError::DuplicateRule`] if two planned rules share a code.
    pub fn build(self) -> Result<Schema, SchemaError> {
        let mut declared = BTreeSet::new();
        for &field in &self.fields {
            if !declared.insert(field) {
                return Err(SchemaError::DuplicateField(field));
            }
        }

        for rule in &self.extras {
            if let Some(&field) = rule.fields().iter().find(|f| !declared.contains(*f)) {
                return Err(SchemaError::UndeclaredField {
                    rule: rule.id().code().to_owned(),
                    field,
                });
            }
        }

        let builtins = builtin_rules();
        for code in &self.excluded {
            if !builtins.iter().any(|rule| rule.id().code() == code) {
                return Err(SchemaError::UnknownExclusion(code.clone()));
            }
        }

        let mut planned: Vec<Box<dyn ValidationRule>> = self.extras;
        if self.auto_rules {
            for rule in builtins {
                let id = rule.id();
                if self.excluded.iter().any(|code| code == id.code()) {
                    trace!(schema = %self.name, rule = %id, "rule excluded");
                    continue;
                }
                if rule.fields().iter().all(|f| declared.contains(f)) {
                    planned.push(rule);
                } else {
                    trace!(schema = %self.name, rule = %id, "rule not wired, fields missing");
                }
            }
        }

        let mut codes = HashSet::new();
        for rule in &planned {
            let id = rule.id();
            if !codes.insert(id.code().to_owned()) {
                return Err(SchemaError::DuplicateRule(id.code().to_owned()));
            }
        }

        debug!(
            schema = %self.name,
            fields = declared.len(),
            rules = planned.len(),
            "built rule plan"
        );

        Ok(Schema {
            name: self.name,
            fields: declared,
            plan: RulePlan {
                rules: planned.into(),
            },
        })
    }
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// An immutable record shape with its wired rule plan.
///
/// `Schema` is `Send + Sync`; build it once and share it.
#[derive(Debug, Clone)]
pub struct Schema {
    name: String,
    fields: BTreeSet<Field>,
    plan: RulePlan,
}

impl Schema {
    /// Shorthand for [`SchemaBuilder::new`].
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder::new(name)
    }

    /// The schema name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared fields in canonical order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.iter().copied()
    }

    /// Returns `true` if the schema declares `field`.
    pub fn declares(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }

    /// The wired rule plan.
    pub fn plan(&self) -> &RulePlan {
        &self.plan
    }

    /// Normalizes `input` and runs every planned rule against it.
    ///
    /// Every violation is collected; nothing short-circuits.  Fields the
    /// schema does not declare are reported as [`ViolationKind::Undeclared`].
    /// A rule is skipped only when its target field, or the payment type it
    /// reads, failed normalization, so a malformed value is reported once.
    /// Any other failed field reaches the rule as its trimmed raw text.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] carrying every violation, in the order:
    /// undeclared fields, normalization failures, then rule violations in plan
    /// order.
    pub fn validate(&self, input: &PaymentRecord) -> Result<PaymentRecord, ValidationError> {
        let mut violations = Vec::new();

        for (field, value) in input.iter() {
            if !self.declares(field) {
                violations.push(Violation::new(field, ViolationKind::Undeclared).with_value(value));
            }
        }

        let mut record = PaymentRecord::new();
        let mut failed = BTreeSet::new();
        for &field in &self.fields {
            let raw = input.get(field);
            match normalize(field, raw) {
                Ok(value) => record.set(field, value),
                Err(kind) => {
                    failed.insert(field);
                    violations.push(Violation::new(field, kind).with_value(raw));
                    record.set(field, raw_text(raw));
                }
            }
        }

        for rule in self.plan.iter() {
            let id = rule.id();
            let fields = rule.fields();
            let blocked = fields
                .iter()
                .enumerate()
                .find(|(i, f)| (*i == 0 || **f == Field::PaymentType) && failed.contains(*f))
                .map(|(_, f)| f);
            if let Some(field) = blocked {
                debug!(rule = %id, field = %field, "skipping rule, field failed normalization");
                continue;
            }
            trace!(rule = %id, "running rule");
            let start = violations.len();
            rule.check(&mut record, &mut violations);
            for violation in &mut violations[start..] {
                if violation.rule.is_none() {
                    violation.rule = Some(id.clone());
                }
            }
        }

        debug!(
            schema = %self.name,
            violations = violations.len(),
            "validation finished"
        );

        match ValidationError::from_violations(violations) {
            Some(err) => Err(err),
            None => Ok(record),
        }
    }
}

/// Trimmed text of a value that failed normalization, `None` when blank.
fn raw_text(raw: Option<&Value>) -> Option<Value> {
    let text = raw?.to_string();
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| Value::Text(trimmed.to_owned()))
}
