//! Service generator.

use std::path::{Path, PathBuf};

use cname_core::{FormattedName, GeneratedFile};

/// A service with placeholder CRUD methods.
///
/// Linking the model only adds the model import; the method bodies keep
/// returning placeholder strings either way.
pub struct ServiceJs {
    pub name: FormattedName,
    pub link_model: bool,
}

impl ServiceJs {
    pub fn new(name: FormattedName) -> Self {
        Self {
            name,
            link_model: false,
        }
    }

    pub fn with_model(mut self, link_model: bool) -> Self {
        self.link_model = link_model;
        self
    }
}

impl GeneratedFile for ServiceJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("services")
            .join(format!("{}.service.js", self.name.lower))
    }

    fn render(&self) -> String {
        let pascal = &self.name.pascal;
        let lower = &self.name.lower;

        let model_import = if self.link_model {
            format!("const {pascal} = require(\"../models/{lower}.model\");\n\n")
        } else {
            String::new()
        };

        format!(
            r#"{model_import}class {pascal}Service {{
  async getAll(filters = {{}}) {{
    return "this action gets all {pascal}s";
  }}

  async getById(id) {{
    return `this action gets {pascal} by #${{id}}`;
  }}

  async create(data) {{
    return `this action creates a new {pascal} ${{JSON.stringify(data)}}`;
  }}

  async update(id, data) {{
    return `this action updates {pascal} by #${{id}} with data ${{JSON.stringify(data)}}`;
  }}

  async delete(id) {{
    return `this action deletes {pascal} by #${{id}}`;
  }}
}}

module.exports = new {pascal}Service();
"#
        )
    }
}
