//! Express router generator.

use std::path::{Path, PathBuf};

use cname_core::{FormattedName, GeneratedFile};

/// Router wiring the five CRUD endpoints to the controller, with the
/// validator in front of `create` and `update`.
pub struct RouteJs {
    pub name: FormattedName,
    /// Emit the controller and validator `require` lines.
    pub include_imports: bool,
}

impl RouteJs {
    pub fn new(name: FormattedName) -> Self {
        Self {
            name,
            include_imports: true,
        }
    }

    pub fn with_imports(mut self, include_imports: bool) -> Self {
        self.include_imports = include_imports;
        self
    }
}

impl GeneratedFile for RouteJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("routes")
            .join(format!("{}.routes.js", self.name.lower))
    }

    fn render(&self) -> String {
        let lower = &self.name.lower;

        let imports = if self.include_imports {
            format!(
                "const {lower}Controller = require('../controllers/{lower}.controller');\n\
                 const {lower}Validator = require('../validators/{lower}.validator');\n"
            )
        } else {
            String::new()
        };

        format!(
            r#"const express = require('express');
const router = express.Router();
{imports}
router.get('/', {lower}Controller.getAll);
router.get('/:id', {lower}Controller.getOne);
router.post('/', {lower}Validator.create, {lower}Controller.create);
router.put('/:id', {lower}Validator.update, {lower}Controller.update);
router.delete('/:id', {lower}Controller.delete);

module.exports = router;
"#
        )
    }
}
