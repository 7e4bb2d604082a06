//! Annotation corpora and input file builders.

use annotext::Glossary;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Technical values that cleaning must leave untouched.
pub const MEASUREMENTS: &[&str] = &[
    "45min",
    "80℃",
    "6.5m",
    "Ø50",
    "20m2",
    "20m2;",
    "M12;",
    "0.5mm",
    "1:100",
    "±0.5",
    "A-001",
    "2024-01-01",
    "5kg/只",
    "烘干时间45min/车",
    "长2000X宽500X高600mm",
    "插入点: (0,0,0)",
];

/// Measurements that upstream formatting split apart, with their repaired
/// form.
pub const SPLIT_MEASUREMENTS: &[(&str, &str)] = &[
    ("45 min", "45min"),
    ("80 ℃", "80℃"),
    ("6. 5m", "6.5m"),
    ("0 .5mm", "0.5mm"),
    ("烘干时间45 min/车", "烘干时间45min/车"),
    ("%%c50", "Ø50"),
    ("80%%d", "80°"),
    ("%%p0.5", "±0.5"),
];

/// Raw MTEXT strings and their cleaned form.
pub const MTEXT_SAMPLES: &[(&str, &str)] = &[
    (
        r"\pxqc;{\fSimHei|b1|i0|c134|p49;\H3.5;涂装线技术参数}",
        "涂装线技术参数",
    ),
    (r"{\C1;喷漆室}", "喷漆室"),
    (r"\A1;{\W0.8;卡车保险杠}", "卡车保险杠"),
    (r"\T1.1;\Q15;接地", "接地"),
    (r"\U+5907\U+6CE8", "备注"),
    (r"门\~窗", "门 窗"),
    (r"{\LMPa}", "MPa"),
    (r"\S1^2;", "1/2"),
    (r"工艺平面图\P工件名称", "工艺平面图 工件名称"),
    (r"烘干温度：80%%dC\P烘干时间45min/车", "烘干温度 80°C 烘干时间45min/车"),
    ("图号、型号或标准号", "图号/型号或标准号"),
];

/// A slice of a paint line layout drawing, as extracted.
pub const DRAWING_ANNOTATIONS: &[&str] = &[
    r"\pxqc;{\fSimHei|b1|i0|c134|p49;\H3.5;涂装线技术参数}",
    "工件名称：卡车保险杠等塑料件",
    "最大重量 5kg/只",
    r"长2000X宽500X高600mm",
    "A-001",
    "烘干时间45min/车",
    "LAYER 0",
    r"{\C1;喷漆室}",
    "备 注",
    "%%c50",
];

/// Builder for annotation input files, one annotation per line.
#[derive(Debug, Clone, Default)]
pub struct AnnotationFileBuilder {
    lines: Vec<String>,
}

impl AnnotationFileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn with_lines(mut self, lines: &[&str]) -> Self {
        self.lines.extend(lines.iter().map(|l| l.to_string()));
        self
    }

    /// Writes the lines to `path`, newline-terminated.
    pub fn build(&self, path: &Path) -> Result<PathBuf> {
        let mut content = self.lines.join("\n");
        content.push('\n');
        fs::write(path, content)?;
        Ok(path.to_path_buf())
    }
}

/// Writes a JSON glossary file with the given entries.
pub fn write_glossary(path: &Path, entries: &[(&str, &str)]) -> Result<PathBuf> {
    let glossary: Glossary = entries.iter().copied().collect();
    fs::write(path, glossary.to_json_pretty()?)?;
    Ok(path.to_path_buf())
}

/// Glossary built from literal entries.
pub fn glossary_of(entries: &[(&str, &str)]) -> Glossary {
    entries.iter().copied().collect()
}
