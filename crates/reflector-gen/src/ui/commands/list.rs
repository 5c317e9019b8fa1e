use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};
use reflector_gen::{
  generator::{config::ReflectorConfig, orchestrator::Reflector},
  utils::spec::SpecLoader,
};

use crate::ui::{Colors, term_width};

pub async fn list_operations(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let document = SpecLoader::open(input).await?.parse()?;
  let output = Reflector::new(ReflectorConfig::default()).reflect(&document)?;

  let label = Colors::table(colors.label());
  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  for title in ["MODULE", "METHOD", "VERB", "PATH", "KIND", "PARAMS", "RESPONSE"] {
    header.add_cell(Cell::new(title).fg(label));
  }
  table.set_header(header);

  for (module, method) in output.model.methods() {
    let response = method.request.response_type_name.as_deref().unwrap_or("-");
    let parameters = if method.parameters.is_empty() {
      "-".to_string()
    } else {
      method.parameters.len().to_string()
    };
    let response_color = if method.is_valid() {
      colors.primary()
    } else {
      colors.accent()
    };

    let mut row = Row::new();
    row.add_cell(Cell::new(&module.name).fg(Colors::table(colors.value())));
    row.add_cell(
      Cell::new(&method.name)
        .fg(Colors::table(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(
      Cell::new(method.http_verb)
        .fg(Colors::table(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(&method.endpoint_template).fg(Colors::table(colors.primary())));
    row.add_cell(Cell::new(method.request.attribute_kind).fg(Colors::table(colors.label())));
    row.add_cell(
      Cell::new(parameters)
        .fg(Colors::table(colors.value()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(response).fg(Colors::table(response_color)));
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
