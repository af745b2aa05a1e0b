//! Style copier: moves the six visual attributes between cells by value.

use crate::grid::SpecCell;
use crate::spec::{
    SpecCellAlignment, SpecCellBorder, SpecCellFill, SpecCellFont, SpecCellProtection,
    SpecCellStyle,
};

/// A cell exposing settable font, border, fill, number format, protection
/// and alignment.
pub trait StyledCell {
    fn font(&self) -> &SpecCellFont;
    fn set_font(&mut self, font: SpecCellFont);

    fn border(&self) -> &SpecCellBorder;
    fn set_border(&mut self, border: SpecCellBorder);

    fn fill(&self) -> &SpecCellFill;
    fn set_fill(&mut self, fill: SpecCellFill);

    fn num_format(&self) -> &str;
    fn set_num_format(&mut self, num_format: String);

    fn protection(&self) -> &SpecCellProtection;
    fn set_protection(&mut self, protection: SpecCellProtection);

    fn alignment(&self) -> &SpecCellAlignment;
    fn set_alignment(&mut self, alignment: SpecCellAlignment);
}

/// Copy all six style attributes of `cell_src` onto `cell_dst`.
///
/// Every attribute is cloned, so later edits to either side never reach the
/// other. The destination value is left alone.
pub fn copy_cell_style<S, D>(cell_src: &S, cell_dst: &mut D)
where
    S: StyledCell + ?Sized,
    D: StyledCell + ?Sized,
{
    cell_dst.set_font(cell_src.font().clone());
    cell_dst.set_border(cell_src.border().clone());
    cell_dst.set_fill(cell_src.fill().clone());
    cell_dst.set_num_format(cell_src.num_format().to_string());
    cell_dst.set_protection(*cell_src.protection());
    cell_dst.set_alignment(cell_src.alignment().clone());
    log::debug!("copied cell style (num_format={:?})", cell_src.num_format());
}

impl StyledCell for SpecCellStyle {
    fn font(&self) -> &SpecCellFont {
        &self.font
    }
    fn set_font(&mut self, font: SpecCellFont) {
        self.font = font;
    }

    fn border(&self) -> &SpecCellBorder {
        &self.border
    }
    fn set_border(&mut self, border: SpecCellBorder) {
        self.border = border;
    }

    fn fill(&self) -> &SpecCellFill {
        &self.fill
    }
    fn set_fill(&mut self, fill: SpecCellFill) {
        self.fill = fill;
    }

    fn num_format(&self) -> &str {
        &self.num_format
    }
    fn set_num_format(&mut self, num_format: String) {
        self.num_format = num_format;
    }

    fn protection(&self) -> &SpecCellProtection {
        &self.protection
    }
    fn set_protection(&mut self, protection: SpecCellProtection) {
        self.protection = protection;
    }

    fn alignment(&self) -> &SpecCellAlignment {
        &self.alignment
    }
    fn set_alignment(&mut self, alignment: SpecCellAlignment) {
        self.alignment = alignment;
    }
}

// Grid cells delegate to their bundle.
impl StyledCell for SpecCell {
    fn font(&self) -> &SpecCellFont {
        self.style.font()
    }
    fn set_font(&mut self, font: SpecCellFont) {
        self.style.set_font(font);
    }

    fn border(&self) -> &SpecCellBorder {
        self.style.border()
    }
    fn set_border(&mut self, border: SpecCellBorder) {
        self.style.set_border(border);
    }

    fn fill(&self) -> &SpecCellFill {
        self.style.fill()
    }
    fn set_fill(&mut self, fill: SpecCellFill) {
        self.style.set_fill(fill);
    }

    fn num_format(&self) -> &str {
        self.style.num_format()
    }
    fn set_num_format(&mut self, num_format: String) {
        self.style.set_num_format(num_format);
    }

    fn protection(&self) -> &SpecCellProtection {
        self.style.protection()
    }
    fn set_protection(&mut self, protection: SpecCellProtection) {
        self.style.set_protection(protection);
    }

    fn alignment(&self) -> &SpecCellAlignment {
        self.style.alignment()
    }
    fn set_alignment(&mut self, alignment: SpecCellAlignment) {
        self.style.set_alignment(alignment);
    }
}
