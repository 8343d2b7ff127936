#[cfg(test)]
mod data;
#[cfg(test)]
mod icu;
#[cfg(test)]
mod ucd;
