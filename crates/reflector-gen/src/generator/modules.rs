use indexmap::{IndexMap, map::Entry};

use crate::generator::{
  document::{HttpVerb, Operation, PathItem},
  enum_registry::EnumRegistry,
  metrics::GenerationWarning,
  model::Module,
  naming::operations::module_name_from_operation_id,
  requests::RequestResponseAnalyzer,
};

/// One operation queued for a module before analysis.
#[derive(Debug, Clone, Copy)]
pub struct OperationEntry<'doc> {
  pub verb: HttpVerb,
  pub endpoint_template: &'doc str,
  pub operation: &'doc Operation,
}

#[derive(Debug, Clone)]
pub struct OperationGroup<'doc> {
  pub canonical_path_prefix: &'doc str,
  pub entries: Vec<OperationEntry<'doc>>,
}

/// Groups endpoints into modules keyed by the `operationId` prefix of their first verb.
pub struct ModuleAggregator<'a> {
  registry: &'a mut EnumRegistry,
  warnings: &'a mut Vec<GenerationWarning>,
}

impl<'a> ModuleAggregator<'a> {
  pub fn new(registry: &'a mut EnumRegistry, warnings: &'a mut Vec<GenerationWarning>) -> Self {
    Self { registry, warnings }
  }

  pub fn aggregate(&mut self, paths: &IndexMap<String, PathItem>) -> Vec<Module> {
    let groups = Self::group_operations(paths, self.warnings);

    groups
      .into_iter()
      .map(|(name, group)| self.build_module(name, &group))
      .collect()
  }

  /// Groups every verb of every endpoint, merging endpoints that map to the same module.
  ///
  /// Verb entries that failed to decode are reported and left out; the module key then comes
  /// from the first verb that did decode.
  ///
  /// A merge keeps the strictly shorter endpoint template as the canonical prefix, so
  /// `/users` wins over `/users/{id}` whichever is declared first.
  pub fn group_operations<'doc>(
    paths: &'doc IndexMap<String, PathItem>,
    warnings: &mut Vec<GenerationWarning>,
  ) -> IndexMap<String, OperationGroup<'doc>> {
    let mut groups: IndexMap<String, OperationGroup<'doc>> = IndexMap::new();

    for (endpoint_template, path_item) in paths {
      let endpoint_template = endpoint_template.as_str();
      for rejected in path_item.rejected_operations() {
        warnings.push(GenerationWarning::MalformedOperation {
          operation: format!("{} {endpoint_template}", rejected.verb),
          reason: rejected.reason.clone(),
        });
      }

      let Some((_, first)) = path_item.first_operation() else {
        continue;
      };
      if first.operation_id.is_none() {
        warnings.push(GenerationWarning::MissingOperationId {
          endpoint: endpoint_template.to_string(),
        });
      }

      let name = module_name_from_operation_id(first.operation_id.as_deref());
      let entries = path_item.operations().map(|(verb, operation)| OperationEntry {
        verb,
        endpoint_template,
        operation,
      });

      match groups.entry(name) {
        Entry::Occupied(mut occupied) => {
          let group = occupied.get_mut();
          if endpoint_template.len() < group.canonical_path_prefix.len() {
            group.canonical_path_prefix = endpoint_template;
          }
          group.entries.extend(entries);
        }
        Entry::Vacant(vacant) => {
          vacant.insert(OperationGroup {
            canonical_path_prefix: endpoint_template,
            entries: entries.collect(),
          });
        }
      }
    }

    groups
  }

  fn build_module(&mut self, name: String, group: &OperationGroup<'_>) -> Module {
    let mut analyzer = RequestResponseAnalyzer::new(self.registry, self.warnings);
    let methods = group
      .entries
      .iter()
      .map(|entry| analyzer.build_method(entry.verb, entry.endpoint_template, entry.operation, &name))
      .collect();

    Module {
      name,
      canonical_path_prefix: group.canonical_path_prefix.to_string(),
      methods,
    }
  }
}
