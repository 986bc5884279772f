//! Controller generator.

use std::path::{Path, PathBuf};

use cname_core::{FormattedName, GeneratedFile};

/// A CRUD controller for a resource.
///
/// Exposes `getAll`, `getOne`, `create`, `update` and `delete`, each wrapped in
/// `asyncErrorHandler`. When linked to the service, each handler delegates to
/// the matching service method and the single-item handlers answer 404 on a
/// falsy result.
pub struct ControllerJs {
    pub name: FormattedName,
    pub link_service: bool,
}

impl ControllerJs {
    pub fn new(name: FormattedName) -> Self {
        Self {
            name,
            link_service: true,
        }
    }

    pub fn with_service(mut self, link_service: bool) -> Self {
        self.link_service = link_service;
        self
    }
}

/// Per-handler fragments that differ between linked and placeholder output.
struct Handlers {
    get_all: String,
    get_one: String,
    create: String,
    update: String,
    delete: String,
    list: String,
    item: String,
    item_guard: String,
    delete_guard: String,
}

impl Handlers {
    fn linked(name: &FormattedName) -> Self {
        let FormattedName {
            lower,
            pascal,
            plural,
            ..
        } = name;

        Self {
            get_all: format!("const {plural} = await {pascal}Service.getAll(req.query);"),
            get_one: format!("const {lower} = await {pascal}Service.getById(req.params.id);"),
            create: format!("const {lower} = await {pascal}Service.create(req.body);"),
            update: format!(
                "const {lower} = await {pascal}Service.update(req.params.id, req.body);"
            ),
            delete: format!("const result = await {pascal}Service.delete(req.params.id);"),
            list: plural.clone(),
            item: lower.clone(),
            item_guard: lower.clone(),
            delete_guard: "result".to_string(),
        }
    }

    fn placeholder() -> Self {
        let todo = "// TODO: add service logic".to_string();
        Self {
            get_all: todo.clone(),
            get_one: todo.clone(),
            create: todo.clone(),
            update: todo.clone(),
            delete: todo,
            list: "[]".to_string(),
            item: "{}".to_string(),
            item_guard: "true".to_string(),
            delete_guard: "true".to_string(),
        }
    }
}

impl GeneratedFile for ControllerJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("controllers")
            .join(format!("{}.controller.js", self.name.lower))
    }

    fn render(&self) -> String {
        let pascal = &self.name.pascal;
        let lower = &self.name.lower;

        let service_import = if self.link_service {
            format!("const {pascal}Service = require(\"../services/{lower}.service\");\n")
        } else {
            String::new()
        };

        let Handlers {
            get_all,
            get_one,
            create,
            update,
            delete,
            list,
            item,
            item_guard,
            delete_guard,
        } = if self.link_service {
            Handlers::linked(&self.name)
        } else {
            Handlers::placeholder()
        };

        format!(
            r#"const asyncErrorHandler = require("../utils/asyncErrorHandler");
const ApiError = require("../utils/apiError");
const sendResponse = require("../utils/sendResponse");
{service_import}
class {pascal}Controller {{
  async getAll(req, res) {{
    {get_all}
    return sendResponse(res, 200, "success", "{pascal}s fetched successfully", {list});
  }}

  async getOne(req, res) {{
    {get_one}

    if (!{item_guard}) {{
      throw new ApiError("{pascal} not found", 404);
    }}

    return sendResponse(res, 200, "success", "{pascal} fetched successfully", {item});
  }}

  async create(req, res) {{
    {create}
    return sendResponse(res, 201, "success", "{pascal} created successfully", {item});
  }}

  async update(req, res) {{
    {update}

    if (!{item_guard}) {{
      throw new ApiError("{pascal} not found", 404);
    }}

    return sendResponse(res, 200, "success", "{pascal} updated successfully", {item});
  }}

  async delete(req, res) {{
    {delete}

    if (!{delete_guard}) {{
      throw new ApiError("{pascal} not found", 404);
    }}

    return sendResponse(res, 200, "success", "{pascal} deleted successfully");
  }}
}}

const controller = new {pascal}Controller();

module.exports = {{
  getAll: asyncErrorHandler(controller.getAll.bind(controller)),
  getOne: asyncErrorHandler(controller.getOne.bind(controller)),
  create: asyncErrorHandler(controller.create.bind(controller)),
  update: asyncErrorHandler(controller.update.bind(controller)),
  delete: asyncErrorHandler(controller.delete.bind(controller)),
}};
"#
        )
    }
}
