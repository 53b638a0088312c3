#![allow(clippy::unwrap_used)]

use super::*;

fn cp1252(text: &str) -> Vec<u8> {
    let (bytes, _, had_errors) = WINDOWS_1252.encode(text);
    assert!(!had_errors);
    bytes.into_owned()
}

// ── decode ────────────────────────────────────────────────────

#[test]
fn test_decode_windows_1252_accents() {
    let bytes = [b'D', b'e', b's', b'c', b'r', b'i', 0xE7, 0xE3, b'o'];
    assert_eq!(decode(&bytes), "Descrição");
}

#[test]
fn test_decode_is_not_utf8() {
    // UTF-8 "ç" is two bytes; read as Windows-1252 it becomes two characters.
    assert_eq!(decode("ç".as_bytes()), "Ã§");
}

// ── detect_delimiter ──────────────────────────────────────────

#[test]
fn test_detect_semicolon_with_decimal_commas() {
    let text = "Código;Descrição;Unid.;Quant.;Unit.\n\
                1.1;Escavação;m3;10,5;100,00\n\
                1.2;Aterro;m3;3,25;42,10\n";
    assert_eq!(detect_delimiter(text), b';');
}

#[test]
fn test_detect_comma() {
    let text = "Fornecedor,Categoria,Valor,Data\n\
                Acme,Material,100.50,01/08/2025\n\
                Beta,Serviço,20.00,02/08/2025\n";
    assert_eq!(detect_delimiter(text), b',');
}

#[test]
fn test_detect_comma_ignores_quoted_semicolons() {
    let text = "a,b,c\n\"x;y\",2,3\n\"p;q\",5,6\n";
    assert_eq!(detect_delimiter(text), b',');
}

#[test]
fn test_detect_tab() {
    let text = "Fornecedor\tValor\nAcme\t1.250,00\nBeta\t10,00\n";
    assert_eq!(detect_delimiter(text), b'\t');
}

#[test]
fn test_detect_pipe() {
    let text = "a|b|c\n1|2|3\n";
    assert_eq!(detect_delimiter(text), b'|');
}

#[test]
fn test_detect_ignores_preamble_lines() {
    let text = "PLANILHA ORÇAMENTÁRIA\n\n\
                Código;Descrição;Quant.\n\
                1;Item um;2,0\n\
                2;Item dois;3,0\n";
    assert_eq!(detect_delimiter(text), b';');
}

#[test]
fn test_detect_defaults_to_semicolon() {
    assert_eq!(detect_delimiter("only one column\nsecond line\n"), b';');
    assert_eq!(detect_delimiter(""), b';');
}

// ── read_rows ─────────────────────────────────────────────────

#[test]
fn test_read_rows_decodes_and_splits() {
    let bytes = cp1252("Código;Descrição\n1.1;Fundação\n");
    let rows = read_rows(&bytes).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], vec!["Código", "Descrição"]);
    assert_eq!(rows[1], vec!["1.1", "Fundação"]);
}

#[test]
fn test_read_rows_flexible_widths() {
    let bytes = cp1252("TITULO\na;b;c\n1;2;3\n4;5\n");
    let rows = read_rows(&bytes).unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].len(), 1);
    assert_eq!(rows[3].len(), 2);
}

#[test]
fn test_read_rows_quoted_field_keeps_delimiter() {
    let bytes = cp1252("a;b\n\"x;y\";2\n");
    let rows = read_rows(&bytes).unwrap();
    assert_eq!(rows[1][0], "x;y");
}

#[test]
fn test_read_rows_empty_file() {
    assert!(matches!(read_rows(b""), Err(ImportError::Empty)));
    assert!(matches!(read_rows(b"  \n\n"), Err(ImportError::Empty)));
}
