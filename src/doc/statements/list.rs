/*!
# `LIST [<line number>]`

## Purpose
Prints the program, starting at the given line.

*/
