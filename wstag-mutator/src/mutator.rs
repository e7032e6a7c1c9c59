//! One tag operation, start to finish.
//!
//! ```text
//! validate tags -> Resolved(workspace) -> SymbolsComputed(symbols) -> Renamed
//! ```
//!
//! Tag names are resolved against the registry before the window manager is
//! contacted, so an unknown tag never leads to a query or a rename. Every
//! successful run ends in exactly one rename (skipped only for dry runs).

use wstag_core::{NameCodec, Symbol, SymbolSet, TagRegistry, Workspace, WorkspaceDirectory};
use wstag_detector::{Classifier, DetectError, WorkspaceWindowIndex};

use crate::error::MutateError;
use crate::operation::{apply, Operation, Target};

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    pub num: i32,
    pub old_name: String,
    pub new_name: String,
    pub symbols: SymbolSet,
    /// False for dry runs.
    pub renamed: bool,
}

pub struct TagMutator<'a, D: ?Sized> {
    directory: &'a D,
    registry: &'a TagRegistry,
    classifier: &'a Classifier,
    codec: NameCodec,
    dry_run: bool,
}

impl<'a, D: WorkspaceDirectory + ?Sized> TagMutator<'a, D> {
    pub fn new(
        directory: &'a D,
        registry: &'a TagRegistry,
        classifier: &'a Classifier,
        codec: NameCodec,
    ) -> Self {
        Self {
            directory,
            registry,
            classifier,
            codec,
            dry_run: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run `operation` against `target`.
    pub fn run(
        &self,
        target: Target,
        operation: &Operation,
    ) -> Result<MutationOutcome, MutateError> {
        let resolved = self.registry.resolve_all(operation.tag_names())?;

        let workspace = self.resolve(target)?;
        tracing::debug!(
            num = workspace.num,
            name = %workspace.name,
            op = operation.label(),
            "resolved workspace"
        );

        let symbols = self.compute(&workspace, operation, resolved)?;
        let new_name = self.codec.encode(workspace.num, &symbols);

        if self.dry_run {
            tracing::info!(from = %workspace.name, to = %new_name, "dry run, rename skipped");
        } else {
            self.directory.rename(&workspace, &new_name)?;
        }

        Ok(MutationOutcome {
            num: workspace.num,
            old_name: workspace.name,
            new_name,
            symbols,
            renamed: !self.dry_run,
        })
    }

    pub fn resolve(&self, target: Target) -> Result<Workspace, MutateError> {
        let workspace = match target {
            Target::Focused => self.directory.focused()?,
            Target::Number(num) => self.directory.by_number(num)?,
        };
        Ok(workspace)
    }

    /// New symbol set for `workspace`. `resolved` holds the symbols of the
    /// operation's tag names.
    pub fn compute(
        &self,
        workspace: &Workspace,
        operation: &Operation,
        resolved: Vec<Symbol>,
    ) -> Result<SymbolSet, MutateError> {
        if let Operation::Auto = operation {
            return self.infer(workspace);
        }
        let current = self.codec.decode(&workspace.name);
        Ok(apply(current, operation, resolved))
    }

    /// Symbols inferred from the windows currently on `workspace`, ordered by
    /// tag name.
    pub fn infer(&self, workspace: &Workspace) -> Result<SymbolSet, MutateError> {
        let tree = self.directory.tree()?;
        let index = WorkspaceWindowIndex::build(&tree);
        let windows = index
            .get(workspace.num)
            .ok_or(DetectError::NoTagsInferred { windows: 0 })?;
        let tags = self.classifier.classify_workspace(windows)?;
        tracing::debug!(num = workspace.num, tags = ?tags, "inferred tags");

        let names: Vec<&str> = tags.iter().map(|t| t.0.as_str()).collect();
        Ok(SymbolSet::from(self.registry.resolve_all(&names)?))
    }
}
