/*!
# `SAVE <filename>`

## Purpose
Writes the program to a file, one line per line of text.

*/
