// A FastA record reduced to what window extraction needs: the protein identifier taken from the
// header, and the raw residue string.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub id: String,
    pub sequence: String,
}
