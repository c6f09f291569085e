//! Traversal helpers over the OpenAPI 3 shape.
//!
//! Rules share these walkers instead of each re-implementing the nested
//! `paths -> operation -> responses -> content -> schema` descent. Every
//! walker yields items in document order and silently skips anything that
//! does not have the expected shape.

use serde_yaml::{Mapping, Value};

use super::access::{entries, get_mapping, get_str};
use super::location::Location;

/// HTTP methods an OpenAPI path item may declare operations for.
pub const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Recursion limit for schema descent and `$ref` chasing.
const MAX_DEPTH: usize = 32;

/// One operation under `paths`.
#[derive(Debug, Clone)]
pub struct Operation<'a> {
    /// The path key, e.g. `/pets/{pet_id}`.
    pub path: String,
    /// The HTTP method key, e.g. `get`.
    pub method: String,
    /// `paths.<path>.<method>`
    pub location: Location,
    /// The enclosing path item.
    pub item: &'a Mapping,
    /// The operation object itself.
    pub operation: &'a Mapping,
    item_location: Location,
}

/// A parameter object together with where it was declared.
#[derive(Debug, Clone)]
pub struct Parameter<'a> {
    pub location: Location,
    pub value: &'a Mapping,
}

impl<'a> Parameter<'a> {
    /// The `name` field.
    pub fn name(&self) -> Option<&'a str> {
        self.value.get("name").and_then(Value::as_str)
    }

    /// The `in` field (`path`, `query`, `header` or `cookie`).
    pub fn placement(&self) -> Option<&'a str> {
        self.value.get("in").and_then(Value::as_str)
    }

    /// The parameter's `schema`, if any.
    pub fn schema(&self) -> Option<&'a Value> {
        self.value.get("schema")
    }
}

/// A named property inside a schema.
#[derive(Debug, Clone)]
pub struct Property<'a> {
    /// `...properties.<name>`
    pub location: Location,
    pub name: String,
    pub schema: &'a Value,
    /// Object nesting level; top-level properties of a schema are at 1.
    pub depth: usize,
}

/// Where a media-type schema was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Request,
    Response,
}

/// A schema attached to a request or response body.
#[derive(Debug, Clone)]
pub struct BodySchema<'a> {
    pub kind: BodyKind,
    pub media_type: String,
    /// `...content.<media_type>.schema`
    pub location: Location,
    pub schema: &'a Value,
}

/// Every operation under `paths`, in document order.
pub fn operations(doc: &Value) -> Vec<Operation<'_>> {
    let paths_loc = Location::root().key("paths");
    let Some(paths) = get_mapping(doc, &paths_loc) else {
        return Vec::new();
    };

    let mut operations = Vec::new();
    for (path, item) in entries(paths) {
        let Some(item) = item.as_mapping() else {
            continue;
        };
        let item_location = paths_loc.key(path.as_str());
        for (method, operation) in entries(item) {
            if !HTTP_METHODS.contains(&method.as_str()) {
                continue;
            }
            if let Some(operation) = operation.as_mapping() {
                operations.push(Operation {
                    path: path.clone(),
                    location: item_location.key(method.as_str()),
                    method,
                    item,
                    operation,
                    item_location: item_location.clone(),
                });
            }
        }
    }
    operations
}

impl<'a> Operation<'a> {
    /// The `operationId`, if declared.
    pub fn operation_id(&self) -> Option<&'a str> {
        self.operation.get("operationId").and_then(Value::as_str)
    }

    /// Effective parameters: path-item level first, then operation level.
    ///
    /// A path-item parameter redeclared on the operation with the same
    /// `name` and `in` is overridden and left out. Local `$ref`s are
    /// resolved against `doc`; the location reported is the place the
    /// parameter is referenced from.
    pub fn parameters(&self, doc: &'a Value) -> Vec<Parameter<'a>> {
        let item_level = resolved_parameters(doc, self.item, &self.item_location);
        let operation_level = resolved_parameters(doc, self.operation, &self.location);

        let overridden = |p: &Parameter<'a>| {
            operation_level
                .iter()
                .any(|o| o.name() == p.name() && o.placement() == p.placement())
        };
        let mut parameters: Vec<Parameter<'a>> = item_level
            .into_iter()
            .filter(|p| !overridden(p))
            .collect();
        parameters.extend(operation_level.iter().cloned());
        parameters
    }

    /// The `responses` mapping, if declared.
    pub fn responses(&self) -> Option<&'a Mapping> {
        self.operation.get("responses").and_then(Value::as_mapping)
    }
}

fn resolved_parameters<'a>(
    doc: &'a Value,
    owner: &'a Mapping,
    location: &Location,
) -> Vec<Parameter<'a>> {
    let Some(list) = owner.get("parameters").and_then(Value::as_sequence) else {
        return Vec::new();
    };
    list.iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            resolve_ref(doc, entry).as_mapping().map(|value| Parameter {
                location: location.key("parameters").index(i),
                value,
            })
        })
        .collect()
}

/// Every inline parameter declaration, each visited exactly once.
///
/// Covers path-item parameters, operation parameters and
/// `components.parameters`. `$ref` entries are skipped because their
/// target is visited where it is defined.
pub fn declared_parameters(doc: &Value) -> Vec<Parameter<'_>> {
    let mut declared = Vec::new();

    let paths_loc = Location::root().key("paths");
    if let Some(paths) = get_mapping(doc, &paths_loc) {
        for (path, item) in entries(paths) {
            let Some(item) = item.as_mapping() else {
                continue;
            };
            let item_location = paths_loc.key(path.as_str());
            collect_inline_parameters(item, &item_location, &mut declared);
            for (method, operation) in entries(item) {
                if !HTTP_METHODS.contains(&method.as_str()) {
                    continue;
                }
                if let Some(operation) = operation.as_mapping() {
                    let location = item_location.key(method.as_str());
                    collect_inline_parameters(operation, &location, &mut declared);
                }
            }
        }
    }

    let components_loc = Location::root().key("components").key("parameters");
    if let Some(components) = get_mapping(doc, &components_loc) {
        for (name, value) in entries(components) {
            if let Some(value) = value.as_mapping() {
                declared.push(Parameter {
                    location: components_loc.key(name.as_str()),
                    value,
                });
            }
        }
    }
    declared
}

fn collect_inline_parameters<'a>(
    owner: &'a Mapping,
    location: &Location,
    out: &mut Vec<Parameter<'a>>,
) {
    let Some(list) = owner.get("parameters").and_then(Value::as_sequence) else {
        return;
    };
    for (i, entry) in list.iter().enumerate() {
        if let Some(value) = entry.as_mapping() {
            if !value.contains_key("$ref") {
                out.push(Parameter {
                    location: location.key("parameters").index(i),
                    value,
                });
            }
        }
    }
}

/// Every request and response body schema, in document order.
///
/// Operation bodies come first, then `components.requestBodies` and
/// `components.responses`.
pub fn body_schemas(doc: &Value) -> Vec<BodySchema<'_>> {
    let mut bodies = Vec::new();

    for operation in operations(doc) {
        if let Some(body) = operation.operation.get("requestBody") {
            let location = operation.location.key("requestBody");
            collect_content(doc, body, &location, BodyKind::Request, &mut bodies);
        }
        if let Some(responses) = operation.responses() {
            let location = operation.location.key("responses");
            for (code, response) in entries(responses) {
                let location = location.key(code.as_str());
                collect_content(doc, response, &location, BodyKind::Response, &mut bodies);
            }
        }
    }

    for (section, kind) in [
        ("requestBodies", BodyKind::Request),
        ("responses", BodyKind::Response),
    ] {
        let section_loc = Location::root().key("components").key(section);
        if let Some(defs) = get_mapping(doc, &section_loc) {
            for (name, body) in entries(defs) {
                let location = section_loc.key(name.as_str());
                collect_content(doc, body, &location, kind, &mut bodies);
            }
        }
    }
    bodies
}

fn collect_content<'a>(
    doc: &'a Value,
    body: &'a Value,
    location: &Location,
    kind: BodyKind,
    out: &mut Vec<BodySchema<'a>>,
) {
    let Some(content) = resolve_ref(doc, body)
        .get("content")
        .and_then(Value::as_mapping)
    else {
        return;
    };
    for (media_type, media) in entries(content) {
        if let Some(schema) = media.get("schema") {
            out.push(BodySchema {
                kind,
                location: location
                    .key("content")
                    .key(media_type.as_str())
                    .key("schema"),
                media_type,
                schema,
            });
        }
    }
}

/// Every named property reachable from component schemas, body schemas and
/// parameter schemas.
///
/// `$ref`s inside schemas are not followed; the referenced component is
/// visited on its own, which keeps each property reported once.
pub fn properties(doc: &Value) -> Vec<Property<'_>> {
    let mut found = Vec::new();

    let schemas_loc = Location::root().key("components").key("schemas");
    if let Some(schemas) = get_mapping(doc, &schemas_loc) {
        for (name, schema) in entries(schemas) {
            collect_properties(schema, &schemas_loc.key(name.as_str()), 0, &mut found);
        }
    }
    for body in body_schemas(doc) {
        collect_properties(body.schema, &body.location, 0, &mut found);
    }
    for parameter in declared_parameters(doc) {
        if let Some(schema) = parameter.schema() {
            collect_properties(schema, &parameter.location.key("schema"), 0, &mut found);
        }
    }
    found
}

fn collect_properties<'a>(
    schema: &'a Value,
    location: &Location,
    depth: usize,
    out: &mut Vec<Property<'a>>,
) {
    if depth >= MAX_DEPTH {
        return;
    }
    let Some(schema_map) = schema.as_mapping() else {
        return;
    };

    if let Some(props) = schema_map.get("properties").and_then(Value::as_mapping) {
        let props_loc = location.key("properties");
        for (name, prop) in entries(props) {
            let prop_loc = props_loc.key(name.as_str());
            out.push(Property {
                location: prop_loc.clone(),
                name,
                schema: prop,
                depth: depth + 1,
            });
            collect_properties(prop, &prop_loc, depth + 1, out);
        }
    }

    if let Some(items) = schema_map.get("items") {
        collect_properties(items, &location.key("items"), depth, out);
    }

    if let Some(extra) = schema_map.get("additionalProperties") {
        collect_properties(extra, &location.key("additionalProperties"), depth, out);
    }

    for combinator in ["allOf", "oneOf", "anyOf"] {
        if let Some(variants) = schema_map.get(combinator).and_then(Value::as_sequence) {
            let combinator_loc = location.key(combinator);
            for (i, variant) in variants.iter().enumerate() {
                collect_properties(variant, &combinator_loc.index(i), depth, out);
            }
        }
    }
}

/// Follow local `$ref` pointers (`#/components/...`) until a non-reference.
///
/// Returns `value` unchanged when it is not a reference, and the last
/// reachable value when a pointer is dangling or the chain is too long.
pub fn resolve_ref<'a>(doc: &'a Value, value: &'a Value) -> &'a Value {
    let mut current = value;
    for _ in 0..MAX_DEPTH {
        let Some(pointer) = current.get("$ref").and_then(Value::as_str) else {
            return current;
        };
        match pointer_target(doc, pointer) {
            Some(target) => current = target,
            None => return current,
        }
    }
    current
}

fn pointer_target<'a>(doc: &'a Value, pointer: &str) -> Option<&'a Value> {
    let path = pointer.strip_prefix("#/")?;
    let location = path
        .split('/')
        .map(|token| token.replace("~1", "/").replace("~0", "~"))
        .fold(Location::root(), |loc, token| loc.key(token));
    super::access::lookup(doc, &location)
}

/// The `type` of a schema, if declared as a single string.
pub fn schema_type(schema: &Value) -> Option<&str> {
    get_str(schema, &Location::root().key("type"))
}

/// The `format` of a schema, if declared.
pub fn schema_format(schema: &Value) -> Option<&str> {
    get_str(schema, &Location::root().key("format"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(source: &str) -> Value {
        serde_yaml::from_str(source).unwrap()
    }

    const PETSTORE: &str = r#"
paths:
  /pets:
    parameters:
      - name: tenant
        in: header
    get:
      operationId: listPets
      parameters:
        - name: limit
          in: query
        - $ref: '#/components/parameters/Cursor'
      responses:
        200:
          content:
            application/json:
              schema:
                type: object
                properties:
                  items:
                    type: array
                    items:
                      type: object
                      properties:
                        pet_id:
                          type: string
    post:
      requestBody:
        content:
          application/json:
            schema:
              $ref: '#/components/schemas/Pet'
    summary: not an operation
components:
  parameters:
    Cursor:
      name: cursor
      in: query
  schemas:
    Pet:
      allOf:
        - properties:
            name:
              type: string
"#;

    #[test]
    fn operations_in_document_order() {
        let doc = yaml(PETSTORE);
        let ops = operations(&doc);

        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0].method, "get");
        assert_eq!(ops[0].location.to_string(), "paths./pets.get");
        assert_eq!(ops[0].operation_id(), Some("listPets"));
        assert_eq!(ops[1].method, "post");
    }

    #[test]
    fn operations_tolerate_missing_paths() {
        assert!(operations(&yaml("{}")).is_empty());
        assert!(operations(&yaml("paths: [1, 2]")).is_empty());
    }

    #[test]
    fn effective_parameters_resolve_refs() {
        let doc = yaml(PETSTORE);
        let ops = operations(&doc);
        let names: Vec<_> = ops[0]
            .parameters(&doc)
            .iter()
            .filter_map(|p| p.name())
            .collect();

        assert_eq!(names, vec!["tenant", "limit", "cursor"]);
    }

    #[test]
    fn operation_parameter_overrides_path_item_parameter() {
        let doc = yaml(
            r#"
paths:
  /m:
    parameters:
      - {name: from, in: query}
      - {name: from, in: header}
    get:
      parameters:
        - {name: from, in: query, required: true}
"#,
        );
        let ops = operations(&doc);
        let locations: Vec<String> = ops[0]
            .parameters(&doc)
            .iter()
            .map(|p| p.location.to_string())
            .collect();

        assert_eq!(
            locations,
            vec!["paths./m.parameters[1]", "paths./m.get.parameters[0]"]
        );
    }

    #[test]
    fn declared_parameters_visit_each_definition_once() {
        let doc = yaml(PETSTORE);
        let locations: Vec<String> = declared_parameters(&doc)
            .iter()
            .map(|p| p.location.to_string())
            .collect();

        assert_eq!(
            locations,
            vec![
                "paths./pets.parameters[0]",
                "paths./pets.get.parameters[0]",
                "components.parameters.Cursor",
            ]
        );
    }

    #[test]
    fn body_schemas_cover_requests_and_responses() {
        let doc = yaml(PETSTORE);
        let bodies = body_schemas(&doc);

        assert_eq!(bodies.len(), 2);
        assert_eq!(bodies[0].kind, BodyKind::Response);
        assert_eq!(
            bodies[0].location.to_string(),
            "paths./pets.get.responses.200.content.application/json.schema"
        );
        assert_eq!(bodies[1].kind, BodyKind::Request);
    }

    #[test]
    fn properties_track_depth_through_items_and_combinators() {
        let doc = yaml(PETSTORE);
        let props = properties(&doc);
        let summary: Vec<(String, usize)> =
            props.iter().map(|p| (p.name.clone(), p.depth)).collect();

        assert_eq!(
            summary,
            vec![
                ("name".to_string(), 1),
                ("items".to_string(), 1),
                ("pet_id".to_string(), 2),
            ]
        );
        assert_eq!(
            props[0].location.to_string(),
            "components.schemas.Pet.allOf[0].properties.name"
        );
    }

    #[test]
    fn resolve_ref_follows_local_pointers() {
        let doc = yaml(PETSTORE);
        let reference = yaml("$ref: '#/components/parameters/Cursor'");

        let resolved = resolve_ref(&doc, &reference);

        assert_eq!(resolved.get("name").and_then(Value::as_str), Some("cursor"));
    }

    #[test]
    fn resolve_ref_stops_on_cycles() {
        let doc = yaml("a:\n  $ref: '#/b'\nb:\n  $ref: '#/a'\n");
        let start = yaml("$ref: '#/a'");

        let resolved = resolve_ref(&doc, &start);

        assert!(resolved.get("$ref").is_some());
    }

    #[test]
    fn dangling_ref_is_returned_as_is() {
        let doc = yaml("{}");
        let reference = yaml("$ref: '#/components/schemas/Missing'");

        assert_eq!(resolve_ref(&doc, &reference), &reference);
    }
}
