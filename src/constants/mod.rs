pub mod code_templates;
