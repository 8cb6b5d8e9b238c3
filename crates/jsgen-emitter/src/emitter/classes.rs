use jsgen_ast::{Class, ClassMember, MethodKind};

use super::{EmitResult, ExprFlags, Printer};
use crate::context::NodeRef;
use crate::precedence::Precedence;
use crate::source_writer::TokenFlags;

impl Printer<'_> {
    // =========================================================================
    // Classes
    // =========================================================================

    #[tracing::instrument(level = "trace", skip(self, class), fields(member_count = class.body.len()))]
    pub(super) fn emit_class(&mut self, class: &Class) -> EmitResult {
        self.keyword("class", TokenFlags::empty());
        if let Some(id) = &class.id {
            self.identifier(id);
        }
        if let Some(super_class) = &class.super_class {
            self.keyword("extends", TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
            self.emit_expression(super_class, Precedence::Call, ExprFlags::empty())?;
        }

        let count = class.body.len();
        self.writer.start_block(count);
        for member in &class.body {
            self.writer.start_class_member();
            self.emit_class_member(class, member)?;
        }
        self.writer.end_block(count);
        Ok(())
    }

    fn emit_class_member(&mut self, class: &Class, member: &ClassMember) -> EmitResult {
        match member {
            ClassMember::Method(method) => {
                if method.is_static {
                    self.keyword("static", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                }
                match method.kind {
                    MethodKind::Get => {
                        self.keyword("get", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                    }
                    MethodKind::Set => {
                        self.keyword("set", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                    }
                    MethodKind::Constructor | MethodKind::Method => {
                        self.emit_method_modifiers(&method.value);
                    }
                }
                self.emit_property_key(&method.key)?;
                self.emit_function_tail(&method.value)
            }
            ClassMember::Property(property) => {
                if property.is_static {
                    self.keyword("static", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                }
                self.emit_property_key(&property.key)?;
                if let Some(value) = &property.value {
                    self.equals();
                    self.emit_expression(value, Precedence::Assign, ExprFlags::empty())?;
                }
                // Fields always close with `;`, whatever the terminator says.
                self.punct(";", TokenFlags::TRAILING);
                Ok(())
            }
            ClassMember::StaticBlock(block) => {
                self.keyword("static", TokenFlags::empty());
                self.emit_statement_block(NodeRef::Class(class), "static_block", &block.body)
            }
        }
    }
}
