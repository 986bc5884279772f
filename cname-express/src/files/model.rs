//! Mongoose model stub.

use std::path::{Path, PathBuf};

use cname_core::{FormattedName, GeneratedFile};

pub struct ModelJs {
    pub name: FormattedName,
}

impl ModelJs {
    pub fn new(name: FormattedName) -> Self {
        Self { name }
    }
}

impl GeneratedFile for ModelJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("models")
            .join(format!("{}.model.js", self.name.lower))
    }

    fn render(&self) -> String {
        let pascal = &self.name.pascal;

        format!(
            r#"const mongoose = require('mongoose');

const {pascal}Schema = new mongoose.Schema({{
  // Define your schema fields here
}});

module.exports = mongoose.model('{pascal}', {pascal}Schema);
"#
        )
    }
}
