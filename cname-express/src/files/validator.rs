//! express-validator rule chains.

use std::path::{Path, PathBuf};

use cname_core::{FormattedName, GeneratedFile};

/// Validation middleware for `create` and `update`.
pub struct ValidatorJs {
    pub name: FormattedName,
}

impl ValidatorJs {
    pub fn new(name: FormattedName) -> Self {
        Self { name }
    }
}

impl GeneratedFile for ValidatorJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("validators")
            .join(format!("{}.validator.js", self.name.lower))
    }

    fn render(&self) -> String {
        let lower = &self.name.lower;

        format!(
            r#"const ApiError = require('../utils/apiError');
const {{ body, param, validationResult }} = require('express-validator');

const {lower}Validator = {{
  /**
   * Validation rules for creating {lower}
   */
  create: [
    body('name')
      .notEmpty()
      .withMessage('Name is required')
      .isLength({{ min: 3 }})
      .withMessage('Name must be at least 3 characters'),
    // Add more validation rules as needed

    (req, res, next) => {{
      const errors = validationResult(req);
      if (!errors.isEmpty()) {{
        return next(new ApiError(errors.array()[0].msg, 400));
      }}
      next();
    }}
  ],

  /**
   * Validation rules for updating {lower}
   */
  update: [
    param('id')
      .notEmpty()
      .withMessage('ID is required'),
    body('name')
      .optional()
      .isLength({{ min: 3 }})
      .withMessage('Name must be at least 3 characters'),
    // Add more validation rules as needed

    (req, res, next) => {{
      const errors = validationResult(req);
      if (!errors.isEmpty()) {{
        return next(new ApiError(errors.array()[0].msg, 400));
      }}
      next();
    }}
  ]
}};

module.exports = {lower}Validator;
"#
        )
    }
}
