use log::{debug, trace};
use pagedom::{Document, Element};

use super::value::{SortDirection, SortKey, SortType, compare};
use crate::config::TableMarkup;

/// Sort state of one clickable header.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderBinding {
    pub table_id: String,
    pub header_id: String,
    /// Cell index of the header within its row.
    pub column: usize,
    pub sort_type: SortType,
    /// `None` until the header is first clicked.
    pub direction: Option<SortDirection>,
}

#[derive(Debug, Clone)]
struct SortableTable {
    id: String,
    /// Every header cell of the header row, typed or not.
    header_ids: Vec<String>,
}

/// Sort engine for every sortable table of a document.
#[derive(Debug, Clone, Default)]
pub struct TableSorter {
    markup: TableMarkup,
    tables: Vec<SortableTable>,
    headers: Vec<HeaderBinding>,
}

impl TableSorter {
    /// Find sortable tables and bind their typed headers.
    ///
    /// Bound headers get the interactive marker and start unsorted; any
    /// direction left in the markup is cleared. Tables without a typed
    /// header are not touched.
    pub fn mount(doc: &mut Document, markup: &TableMarkup) -> Self {
        let mut sorter = Self {
            markup: markup.clone(),
            ..Default::default()
        };

        for table_id in doc.by_class(&markup.table_class) {
            let Some(table) = doc.get(&table_id) else {
                continue;
            };
            let Some(header_row) = header_row(table) else {
                trace!("Sortable table {table_id} has no header row");
                continue;
            };

            let header_cells: Vec<&Element> = cells(header_row).collect();
            let header_ids: Vec<String> = header_cells.iter().map(|c| c.id.clone()).collect();
            let bindings: Vec<HeaderBinding> = header_cells
                .iter()
                .enumerate()
                .filter_map(|(column, cell)| {
                    let declared = cell.get_data(&markup.type_key)?;
                    Some(HeaderBinding {
                        table_id: table_id.clone(),
                        header_id: cell.id.clone(),
                        column,
                        sort_type: SortType::from_declared(declared, &markup.numeric_type),
                        direction: None,
                    })
                })
                .collect();

            if bindings.is_empty() {
                continue;
            }

            for binding in &bindings {
                if let Some(header) = doc.get_mut(&binding.header_id) {
                    header.add_class(&markup.sortable_class);
                    clear_indicator(header, markup);
                }
            }

            debug!("Mounted sortable table {table_id} with {} header(s)", bindings.len());
            sorter.tables.push(SortableTable {
                id: table_id,
                header_ids,
            });
            sorter.headers.extend(bindings);
        }

        sorter
    }

    pub fn bindings(&self) -> &[HeaderBinding] {
        &self.headers
    }

    pub fn binding(&self, header_id: &str) -> Option<&HeaderBinding> {
        self.headers.iter().find(|h| h.header_id == header_id)
    }

    /// Current direction of a header, `None` if unset or not bound.
    pub fn direction(&self, header_id: &str) -> Option<SortDirection> {
        self.binding(header_id).and_then(|h| h.direction)
    }

    /// Handle a click on a header.
    /// Returns false (and does nothing) if the header is not bound.
    pub fn on_header_click(&mut self, doc: &mut Document, header_id: &str) -> bool {
        let Some(index) = self.headers.iter().position(|h| h.header_id == header_id) else {
            return false;
        };

        let table_id = self.headers[index].table_id.clone();
        let direction = SortDirection::next(self.headers[index].direction);

        // Reset every header of this table, records and markup alike
        for binding in self.headers.iter_mut().filter(|h| h.table_id == table_id) {
            binding.direction = None;
        }
        if let Some(table) = self.tables.iter().find(|t| t.id == table_id) {
            for id in &table.header_ids {
                if let Some(header) = doc.get_mut(id) {
                    clear_indicator(header, &self.markup);
                }
            }
        }

        let binding = &mut self.headers[index];
        binding.direction = Some(direction);
        if let Some(header) = doc.get_mut(header_id) {
            set_indicator(header, direction, &self.markup);
        }

        let (column, sort_type) = (binding.column, binding.sort_type);
        debug!("Sorting {table_id} by column {column} ({sort_type:?}, {direction:?})");
        sort_rows(doc, &table_id, column, sort_type, direction, &self.markup.value_key);
        true
    }
}

/// First row of the table head, or the table's first direct row when it
/// has no head.
fn header_row(table: &Element) -> Option<&Element> {
    table
        .first_child_tagged("thead")
        .and_then(|head| head.first_child_tagged("tr"))
        .or_else(|| table.first_child_tagged("tr"))
}

fn cells(row: &Element) -> impl Iterator<Item = &Element> {
    row.child_elements()
        .iter()
        .filter(|c| c.is("th") || c.is("td"))
}

/// Sort value of the cell at `column`: its override attribute verbatim,
/// else its trimmed text. A missing cell yields "".
fn cell_value(row: &Element, column: usize, value_key: &str) -> String {
    match cells(row).nth(column) {
        Some(cell) => match cell.get_data(value_key) {
            Some(value) => value.clone(),
            None => cell.text_content().trim().to_string(),
        },
        None => String::new(),
    }
}

fn clear_indicator(header: &mut Element, markup: &TableMarkup) {
    header.remove_class(&markup.ascending_class);
    header.remove_class(&markup.descending_class);
    header.remove_data(&markup.direction_key);
}

fn set_indicator(header: &mut Element, direction: SortDirection, markup: &TableMarkup) {
    let (class, value) = match direction {
        SortDirection::Ascending => (&markup.ascending_class, &markup.ascending_value),
        SortDirection::Descending => (&markup.descending_class, &markup.descending_value),
    };
    header.add_class(class);
    header.set_data(markup.direction_key.clone(), value.clone());
}

/// Reorder the rows of the table's first body. Row elements are moved,
/// not rebuilt; non-row children of the body stay ahead of the rows.
fn sort_rows(
    doc: &mut Document,
    table_id: &str,
    column: usize,
    sort_type: SortType,
    direction: SortDirection,
    value_key: &str,
) {
    let Some(body) = doc
        .get_mut(table_id)
        .and_then(Element::child_elements_mut)
        .and_then(|children| children.iter_mut().find(|c| c.is("tbody")))
    else {
        return;
    };
    let Some(children) = body.child_elements_mut() else {
        return;
    };

    let (rows, mut others): (Vec<Element>, Vec<Element>) =
        std::mem::take(children).into_iter().partition(|c| c.is("tr"));

    let mut keyed: Vec<(SortKey, Element)> = rows
        .into_iter()
        .map(|row| (SortKey::new(&cell_value(&row, column, value_key), sort_type), row))
        .collect();

    // sort_by is stable: ties keep document order
    keyed.sort_by(|(a, _), (b, _)| compare(a, b, direction));

    others.extend(keyed.into_iter().map(|(_, row)| row));
    *children = others;
}
