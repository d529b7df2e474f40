pub mod d400_finding_summary;
