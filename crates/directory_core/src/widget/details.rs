use crate::directory::types::User;
use crate::names::formatting::format_user_name;
use core::fmt;

/// Column headers, in display order.
pub const HEADERS: [&str; 5] = ["Name", "Street", "Suite", "City", "Zipcode"];

/// Read-only details of the selected user.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsTable {
    pub name: String,
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
}

impl DetailsTable {
    /// Builds the table row of a user, the name in its display form.
    #[must_use]
    #[inline]
    pub fn from_user(user: &User) -> Self {
        Self {
            name: format_user_name(user),
            street: user.address.street.clone(),
            suite: user.address.suite.clone(),
            city: user.address.city.clone(),
            zipcode: user.address.zipcode.clone(),
        }
    }

    /// Cell values in the order of [`HEADERS`]
    #[must_use]
    #[inline]
    pub fn cells(&self) -> [&str; 5] {
        [
            self.name.as_str(),
            self.street.as_str(),
            self.suite.as_str(),
            self.city.as_str(),
            self.zipcode.as_str(),
        ]
    }
}

fn render_row(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<String>>()
        .join(" | ")
        .trim_end()
        .to_owned()
}

/// Column-aligned plain text: header, separator, values.
impl fmt::Display for DetailsTable {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.cells();
        let widths: Vec<usize> = HEADERS
            .iter()
            .zip(cells)
            .map(|(header, cell)| header.chars().count().max(cell.chars().count()))
            .collect();
        let separator = widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<String>>()
            .join("-+-");

        writeln!(formatter, "{}", render_row(&HEADERS, &widths))?;
        writeln!(formatter, "{separator}")?;
        write!(formatter, "{}", render_row(&cells, &widths))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::types::Address;
    use pretty_assertions::assert_eq;

    fn leanne() -> User {
        User::new(
            1,
            String::from("Leanne Graham"),
            Address::new(
                String::from("Kulas Light"),
                String::from("Apt. 556"),
                String::from("Gwenborough"),
                String::from("92998-3874"),
            ),
        )
    }

    #[test]
    fn test_cells_follow_header_order() {
        let table = DetailsTable::from_user(&leanne());
        assert_eq!(
            table.cells(),
            [
                "Graham, Leanne",
                "Kulas Light",
                "Apt. 556",
                "Gwenborough",
                "92998-3874"
            ]
        );
    }

    #[test]
    fn test_render_aligns_columns() {
        let table = DetailsTable::from_user(&leanne());

        let expected = [
            "Name           | Street      | Suite    | City        | Zipcode",
            "---------------+-------------+----------+-------------+-----------",
            "Graham, Leanne | Kulas Light | Apt. 556 | Gwenborough | 92998-3874",
        ]
        .join("\n");

        assert_eq!(table.to_string(), expected);
    }
}
