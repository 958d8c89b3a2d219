//! Node kinds of the TypeScript grammar the engine inspects.

pub const PROGRAM: &str = "program";
pub const COMMENT: &str = "comment";

// Declarations
pub const LEXICAL_DECLARATION: &str = "lexical_declaration";
pub const VARIABLE_DECLARATION: &str = "variable_declaration";
pub const VARIABLE_DECLARATOR: &str = "variable_declarator";
pub const CLASS_DECLARATION: &str = "class_declaration";
pub const INTERFACE_DECLARATION: &str = "interface_declaration";
pub const TYPE_ANNOTATION: &str = "type_annotation";
pub const TYPE_IDENTIFIER: &str = "type_identifier";
pub const GENERIC_TYPE: &str = "generic_type";

// Modules
pub const IMPORT_STATEMENT: &str = "import_statement";
pub const IMPORT_CLAUSE: &str = "import_clause";
pub const NAMED_IMPORTS: &str = "named_imports";
pub const IMPORT_SPECIFIER: &str = "import_specifier";
pub const NAMESPACE_IMPORT: &str = "namespace_import";
pub const EXPORT_STATEMENT: &str = "export_statement";
pub const EXPORT_CLAUSE: &str = "export_clause";

// Object literals
pub const OBJECT: &str = "object";
pub const PAIR: &str = "pair";
pub const SHORTHAND_PROPERTY: &str = "shorthand_property_identifier";
pub const METHOD_DEFINITION: &str = "method_definition";
pub const SPREAD_ELEMENT: &str = "spread_element";
pub const PROPERTY_IDENTIFIER: &str = "property_identifier";
pub const COMPUTED_PROPERTY_NAME: &str = "computed_property_name";

// Literals
pub const ARRAY: &str = "array";
pub const STRING: &str = "string";
pub const STRING_FRAGMENT: &str = "string_fragment";
pub const ESCAPE_SEQUENCE: &str = "escape_sequence";
pub const TEMPLATE_STRING: &str = "template_string";
pub const TEMPLATE_SUBSTITUTION: &str = "template_substitution";
pub const NUMBER: &str = "number";
pub const TRUE: &str = "true";
pub const FALSE: &str = "false";
pub const NULL: &str = "null";
pub const UNDEFINED: &str = "undefined";
pub const REGEX: &str = "regex";
pub const UNARY_EXPRESSION: &str = "unary_expression";

// Expressions
pub const IDENTIFIER: &str = "identifier";
pub const MEMBER_EXPRESSION: &str = "member_expression";
pub const ARROW_FUNCTION: &str = "arrow_function";
pub const FUNCTION_EXPRESSION: &str = "function_expression";
pub const PARENTHESIZED_EXPRESSION: &str = "parenthesized_expression";
pub const AS_EXPRESSION: &str = "as_expression";
pub const SATISFIES_EXPRESSION: &str = "satisfies_expression";
pub const NON_NULL_EXPRESSION: &str = "non_null_expression";

pub const ERROR: &str = "ERROR";

/// Kinds a property value may be rewritten in place from.
pub const LITERALS: &[&str] = &[
    STRING,
    TEMPLATE_STRING,
    NUMBER,
    TRUE,
    FALSE,
    NULL,
    UNDEFINED,
    REGEX,
    ARRAY,
    OBJECT,
    UNARY_EXPRESSION,
];

/// Wrappers that do not change the value of the wrapped expression.
pub const TRANSPARENT_WRAPPERS: &[&str] = &[
    PARENTHESIZED_EXPRESSION,
    AS_EXPRESSION,
    SATISFIES_EXPRESSION,
    NON_NULL_EXPRESSION,
];
